// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Listener-specific error types.
//!
//! A [`ListenerError`] is what a single [`Listener`] handler returns, while a
//! [`ListenerFailure`] pins it to the listener's position in the registry and
//! to the [`Message`] it was handling.
//!
//! [`Listener`]: crate::Listener

use std::{any::Any, fmt, io};

use derive_more::with_trait::{Display, Error};

use crate::event::Message;

use super::utilities::panic_message;

/// Errors a [`Listener`] handler may return.
///
/// [`Listener`]: crate::Listener
#[derive(Debug, Display, Error)]
pub enum ListenerError {
    /// I/O error while rendering output.
    #[display("I/O error: {_0}")]
    Io(io::Error),

    /// Output formatting error.
    #[display("Format error: {_0}")]
    Format(fmt::Error),

    /// Handler panicked.
    #[display("Listener panicked: {message}")]
    Panicked {
        /// Readable panic message.
        #[error(not(source))]
        message: String,
    },

    /// Any other handler-defined failure.
    #[display("{reason}")]
    Custom {
        /// Reason of the failure.
        #[error(not(source))]
        reason: String,
    },
}

impl ListenerError {
    /// Creates a new custom error.
    #[must_use]
    pub fn custom(reason: impl Into<String>) -> Self {
        Self::Custom {
            reason: reason.into(),
        }
    }

    /// Creates a new panic error out of a [`catch_unwind()`] payload.
    ///
    /// [`catch_unwind()`]: std::panic::catch_unwind()
    #[must_use]
    pub fn panicked(payload: &(dyn Any + Send)) -> Self {
        Self::Panicked {
            message: panic_message(payload),
        }
    }

    /// Returns true if this error was caused by a panicking handler.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }

    /// Returns true if this is an I/O error.
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<io::Error> for ListenerError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<fmt::Error> for ListenerError {
    fn from(err: fmt::Error) -> Self {
        Self::Format(err)
    }
}

/// [`ListenerError`] attributed to a particular registered [`Listener`].
///
/// [`Listener`]: crate::Listener
#[derive(Debug, Display, Error)]
#[display("Listener #{index} failed on `{message}`: {source}")]
pub struct ListenerFailure {
    /// Position of the failed [`Listener`] in its registry.
    ///
    /// [`Listener`]: crate::Listener
    index: usize,

    /// [`Message`] being handled when the failure happened.
    message: Message,

    /// Underlying handler error.
    source: ListenerError,
}

impl ListenerFailure {
    /// Creates a new [`ListenerFailure`].
    #[must_use]
    pub const fn new(index: usize, message: Message, source: ListenerError) -> Self {
        Self {
            index,
            message,
            source,
        }
    }

    /// Position of the failed [`Listener`] in its registry.
    ///
    /// [`Listener`]: crate::Listener
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// [`Message`] being handled when the failure happened.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Underlying handler error.
    #[must_use]
    pub const fn error(&self) -> &ListenerError {
        &self.source
    }
}
