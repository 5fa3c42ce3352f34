// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Observers of a tree walk.
//!
//! A [`Listener`] is a formatter, a reporter or any other observer receiving
//! [`Event`]s from the [`TreeWalker`]. It implements only the handlers it
//! cares about, the rest being no-ops.
//!
//! [`TreeWalker`]: crate::TreeWalker

pub mod dispatch;
mod handlers;
mod registry;
#[cfg(feature = "tracing")]
mod trace;

use crate::{
    ast::{DataTable, DocString, Exception, MultilineArg, Status, Step},
    error::{ListenerError, ListenerFailure},
    event::{Custom, Embed, Event, Message},
};

#[cfg(feature = "tracing")]
#[doc(inline)]
pub use self::trace::Trace;
#[doc(inline)]
pub use self::{handlers::Handlers, registry::Listeners};

/// Result of a single [`Listener`] handler.
pub type Result = std::result::Result<(), ListenerError>;

/// Observer of [`Event`]s emitted during a tree walk.
///
/// Every handler defaults to a no-op, so implementors override only the ones
/// they need:
///
/// ```rust
/// # use cucumber_walker::{ast::Step, listener};
/// #[derive(Default)]
/// struct Progress {
///     done: usize,
/// }
///
/// impl listener::Listener for Progress {
///     fn after_step_result(&mut self, _: &Step) -> listener::Result {
///         self.done += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Listener {
    /// Checks whether this [`Listener`] handles the given [`Message`] at all.
    ///
    /// [`Listener`]s answering `false` are skipped silently.
    fn responds_to(&self, message: &Message) -> bool {
        _ = message;
        true
    }

    /// Handles the given [`Message`] about the given [`Event`].
    ///
    /// Defaults to calling the typed handler matching them, see
    /// [`dispatch::deliver()`].
    ///
    /// # Errors
    ///
    /// If the handler fails.
    fn on_event(&mut self, message: &Message, event: &Event<'_>) -> Result {
        dispatch::deliver(self, message, event)
    }

    /// Opens the result of a [`Step`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn before_step_result(&mut self, _step: &Step) -> Result {
        Ok(())
    }

    /// Closes the result of a [`Step`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn after_step_result(&mut self, _step: &Step) -> Result {
        Ok(())
    }

    /// Opens the name line of a [`Step`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn before_step_name(&mut self, _step: &Step) -> Result {
        Ok(())
    }

    /// Closes the name line of a [`Step`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn after_step_name(&mut self, _step: &Step) -> Result {
        Ok(())
    }

    /// Opens the [`MultilineArg`] of a [`Step`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn before_multiline_arg(&mut self, _arg: &MultilineArg) -> Result {
        Ok(())
    }

    /// Closes the [`MultilineArg`] of a [`Step`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn after_multiline_arg(&mut self, _arg: &MultilineArg) -> Result {
        Ok(())
    }

    /// Opens the [`Exception`] of a failed [`Step`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn before_exception(
        &mut self,
        _exception: &Exception,
        _status: Status,
    ) -> Result {
        Ok(())
    }

    /// Closes the [`Exception`] of a failed [`Step`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn after_exception(
        &mut self,
        _exception: &Exception,
        _status: Status,
    ) -> Result {
        Ok(())
    }

    /// Opens a [`DataTable`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn before_table(&mut self, _table: &DataTable) -> Result {
        Ok(())
    }

    /// Closes a [`DataTable`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn after_table(&mut self, _table: &DataTable) -> Result {
        Ok(())
    }

    /// Opens a [`DataTable`] row.
    ///
    /// # Errors
    ///
    /// If output fails.
    fn before_table_row(&mut self, _index: usize, _cells: &[String]) -> Result {
        Ok(())
    }

    /// Closes a [`DataTable`] row.
    ///
    /// # Errors
    ///
    /// If output fails.
    fn after_table_row(&mut self, _index: usize, _cells: &[String]) -> Result {
        Ok(())
    }

    /// Handles a single [`DataTable`] cell.
    ///
    /// # Errors
    ///
    /// If output fails.
    fn table_cell_value(&mut self, _column: usize, _value: &str) -> Result {
        Ok(())
    }

    /// Handles a [`DocString`].
    ///
    /// # Errors
    ///
    /// If output fails.
    fn doc_string(&mut self, _doc_string: &DocString) -> Result {
        Ok(())
    }

    /// Handles free-form output of step definitions.
    ///
    /// # Errors
    ///
    /// If output fails.
    fn puts(&mut self, _messages: &[String]) -> Result {
        Ok(())
    }

    /// Handles an attachment of step definitions.
    ///
    /// # Errors
    ///
    /// If output fails.
    fn embed(&mut self, _embed: &Embed) -> Result {
        Ok(())
    }

    /// Handles a failure of another [`Listener`], isolated from the walk.
    ///
    /// # Errors
    ///
    /// If output fails. Such errors are logged and dropped.
    fn listener_failed(&mut self, _failure: &ListenerFailure) -> Result {
        Ok(())
    }

    /// Handles a [`Custom`] event in any phase.
    ///
    /// # Errors
    ///
    /// If output fails.
    fn custom(&mut self, _message: &Message, _custom: &Custom) -> Result {
        Ok(())
    }
}
