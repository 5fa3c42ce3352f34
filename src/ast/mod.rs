// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Nodes of a [Cucumber] scenario tree walked by a [`TreeWalker`].
//!
//! [`Scenario`]s and [`Step`]s are executable: accepting a visitor may run
//! them. Report-only nodes implement [`Accept`] and only emit events.
//!
//! [`TreeWalker`]: crate::TreeWalker
//! [Cucumber]: https://cucumber.io

mod convert;
mod exception;
mod location;
mod multiline;
mod scenario;
mod step;
mod table;

use crate::{error::Result, walker::Visitor};

#[doc(inline)]
pub use self::{
    exception::Exception,
    location::Location,
    multiline::{DocString, MultilineArg},
    scenario::{Scenario, Steps},
    step::{CaptureName, Invocation, Status, Step, StepMatch},
    table::DataTable,
};

/// Report-only node, handing itself to a [`Visitor`] as events.
///
/// Node kinds the [`Visitor`] has no method for should implement this trait,
/// emitting [`Event::Custom`] via [`Visitor::notify()`] or
/// [`Visitor::broadcast()`].
///
/// [`Event::Custom`]: crate::Event::Custom
pub trait Accept {
    /// Emits the events describing this node to the `visitor`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the `visitor` fails with.
    fn accept(&self, visitor: &mut dyn Visitor) -> Result<()>;
}
