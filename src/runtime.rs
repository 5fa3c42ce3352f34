// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Collaborator running hooks and steps on behalf of a [`TreeWalker`].
//!
//! [`TreeWalker`]: crate::TreeWalker

use crate::{
    ast::{Scenario, Step},
    error::Result,
    walker::Visitor,
};

/// Body run by [`Runtime::with_hooks()`].
pub type Body<'b> = dyn FnMut(&mut Scenario) -> Result<()> + 'b;

/// Runtime matching and running step definitions, and surrounding
/// [`Scenario`]s with hooks.
pub trait Runtime {
    /// Runs the `body` surrounded by the `Before` and `After` hooks of the
    /// `scenario`.
    ///
    /// `After` hooks must run even if the `body` fails. A failed `Before`
    /// hook should [mark the scenario failed][1] rather than skip the `body`,
    /// so its steps are still reported.
    ///
    /// # Errors
    ///
    /// Returns the `body` error unchanged, or a [`HookError`] wrapped into a
    /// [`WalkError`].
    ///
    /// [1]: Scenario::mark_failed
    /// [`HookError`]: crate::error::HookError
    /// [`WalkError`]: crate::error::WalkError
    fn with_hooks(
        &self,
        scenario: &mut Scenario,
        skip_hooks: bool,
        body: &mut Body<'_>,
    ) -> Result<()>;

    /// Runs the given `step`, recording its outcome into it.
    ///
    /// Step definitions may print or attach things via the `visitor`. Step
    /// failures are recorded with [`Step::fail()`], not returned.
    ///
    /// # Errors
    ///
    /// If the `visitor` fails.
    fn invoke(&self, step: &mut Step, visitor: &mut dyn Visitor) -> Result<()> {
        _ = (step, visitor);
        Ok(())
    }
}

/// [`Runtime`] without any hooks, running nothing.
///
/// Useful for reporting already executed [`Scenario`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl Runtime for NoHooks {
    fn with_hooks(
        &self,
        scenario: &mut Scenario,
        _: bool,
        body: &mut Body<'_>,
    ) -> Result<()> {
        body(scenario)
    }
}
