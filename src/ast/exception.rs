// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Failure details of a [`Step`].
//!
//! [`Step`]: super::Step

use std::any::Any;

use derive_more::with_trait::Display;

use crate::error::utilities::panic_message;

use super::Location;

/// Failure of a [`Step`], computed by a [`Runtime`] and reported as data.
///
/// [`Runtime`]: crate::Runtime
/// [`Step`]: super::Step
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{message}")]
pub struct Exception {
    message: String,
    trace: Vec<String>,
    location: Option<Location>,
}

impl Exception {
    /// Creates a new [`Exception`] with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: Vec::new(),
            location: None,
        }
    }

    /// Creates a new [`Exception`] out of a panicked step's
    /// [`catch_unwind()`] payload.
    ///
    /// [`catch_unwind()`]: std::panic::catch_unwind()
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        Self::new(panic_message(payload))
    }

    /// Attaches backtrace lines.
    #[must_use]
    pub fn with_trace<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trace = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Attaches the location the failure was raised at.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Backtrace lines, outermost frame last.
    #[must_use]
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Location the failure was raised at, if known.
    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

impl<E: std::error::Error> From<&E> for Exception {
    /// Collects the error message with its whole [`source()`] chain as trace.
    ///
    /// [`source()`]: std::error::Error::source
    fn from(err: &E) -> Self {
        let trace = std::iter::successors(err.source(), |e| e.source())
            .map(ToString::to_string);
        Self::new(err.to_string()).with_trace(trace)
    }
}

#[cfg(test)]
mod tests {
    use std::{io, panic};

    use crate::error::HookError;

    use super::*;

    #[test]
    fn from_panic_payload() {
        let payload = panic::catch_unwind(|| panic!("expected 2, got 3"))
            .expect_err("should panic");
        let exception = Exception::from_panic(&*payload);
        assert_eq!(exception.message(), "expected 2, got 3");
        assert!(exception.trace().is_empty());
    }

    #[test]
    fn from_error_collects_source_chain() {
        let err = crate::error::ListenerError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "no such file",
        ));
        let exception = Exception::from(&err);
        assert_eq!(exception.to_string(), "I/O error: no such file");
        assert_eq!(exception.trace(), ["no such file"]);

        let exception = Exception::from(&HookError::before("down"));
        assert!(exception.trace().is_empty());
    }
}
