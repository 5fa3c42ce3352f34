// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Visitor`] surface handed to nodes and step definitions.

use crate::{
    ast::{Exception, MultilineArg, Status, Step},
    error::Result,
    event::{Embed, Event},
};

/// Work nested into a bracketed event by [`Visitor::broadcast()`].
pub type Work<'w> = dyn FnMut(&mut dyn Visitor) -> Result<()> + 'w;

/// Visitor of scenario tree nodes, turning them into [`Event`]s.
///
/// Nodes call the method matching their kind. Node kinds without a method
/// here use [`Visitor::notify()`] for atomic events, or
/// [`Visitor::broadcast()`] for bracketed ones.
pub trait Visitor {
    /// Runs the `step` unless its invocation is skipped, then reports it.
    ///
    /// # Errors
    ///
    /// If the [`Runtime`] or a listener fails.
    ///
    /// [`Runtime`]: crate::Runtime
    fn visit_step(&mut self, step: &mut Step) -> Result<()>;

    /// Reports the result of the `step`: its name, then its multiline
    /// argument and its exception, if any.
    ///
    /// # Errors
    ///
    /// If a listener fails.
    fn visit_step_result(&mut self, step: &Step) -> Result<()>;

    /// Reports the name line of the `step`.
    ///
    /// # Errors
    ///
    /// If a listener fails.
    fn visit_step_name(&mut self, step: &Step) -> Result<()>;

    /// Reports the multiline `arg`ument of a step, letting it describe its
    /// own content.
    ///
    /// # Errors
    ///
    /// If a listener fails.
    fn visit_multiline_arg(&mut self, arg: &MultilineArg) -> Result<()>;

    /// Reports the `exception` of a failed step.
    ///
    /// # Errors
    ///
    /// If a listener fails.
    fn visit_exception(
        &mut self,
        exception: &Exception,
        status: Status,
    ) -> Result<()>;

    /// Reports the `event` as bracketed, running the `work` between its
    /// `before_` and `after_` messages.
    ///
    /// # Errors
    ///
    /// If the `work` or a listener fails.
    fn broadcast(&mut self, event: Event<'_>, work: &mut Work<'_>) -> Result<()>;

    /// Reports the `event` as atomic.
    ///
    /// # Errors
    ///
    /// If a listener fails.
    fn notify(&mut self, event: Event<'_>) -> Result<()>;

    /// Reports free-form output of a step definition.
    ///
    /// # Errors
    ///
    /// If a listener fails.
    fn puts(&mut self, messages: &[String]) -> Result<()>;

    /// Reports an attachment of a step definition.
    ///
    /// # Errors
    ///
    /// If a listener fails.
    fn embed(&mut self, embed: &Embed) -> Result<()>;
}
