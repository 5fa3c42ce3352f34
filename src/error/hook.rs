// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Hook failures reported by a [`Runtime`].
//!
//! [`Runtime`]: crate::Runtime

use std::any::Any;

use derive_more::with_trait::{Display, Error};

use super::utilities::panic_message;

/// Type of a hook executed around a [`Scenario`].
///
/// [`Scenario`]: crate::ast::Scenario
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum HookType {
    /// Executing on each [`Scenario`] before running all its steps.
    ///
    /// [`Scenario`]: crate::ast::Scenario
    #[display("Before")]
    Before,

    /// Executing on each [`Scenario`] after running all its steps.
    ///
    /// [`Scenario`]: crate::ast::Scenario
    #[display("After")]
    After,
}

/// Failure of a [`Runtime`] hook.
///
/// [`Runtime`]: crate::Runtime
#[derive(Clone, Debug, Display, Error)]
#[display("{hook} hook failed: {reason}")]
pub struct HookError {
    /// Which hook failed.
    hook: HookType,

    /// Reason of the failure.
    #[error(not(source))]
    reason: String,
}

impl HookError {
    /// Creates a new [`HookError`] of the given [`HookType`].
    #[must_use]
    pub fn new(hook: HookType, reason: impl Into<String>) -> Self {
        Self {
            hook,
            reason: reason.into(),
        }
    }

    /// Creates a new failure of a [`HookType::Before`] hook.
    #[must_use]
    pub fn before(reason: impl Into<String>) -> Self {
        Self::new(HookType::Before, reason)
    }

    /// Creates a new failure of a [`HookType::After`] hook.
    #[must_use]
    pub fn after(reason: impl Into<String>) -> Self {
        Self::new(HookType::After, reason)
    }

    /// Creates a new failure out of a panicked hook's [`catch_unwind()`]
    /// payload.
    ///
    /// [`catch_unwind()`]: std::panic::catch_unwind()
    #[must_use]
    pub fn panicked(hook: HookType, payload: &(dyn Any + Send)) -> Self {
        Self::new(hook, panic_message(payload))
    }

    /// Returns the [`HookType`] of the failed hook.
    #[must_use]
    pub const fn hook(&self) -> HookType {
        self.hook
    }

    /// Returns the reason of this failure.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_hook_type() {
        assert_eq!(
            HookError::before("db is down").to_string(),
            "Before hook failed: db is down",
        );
        assert_eq!(
            HookError::after("cleanup").to_string(),
            "After hook failed: cleanup",
        );
    }

    #[test]
    fn panicked_hook_keeps_message() {
        let err = HookError::panicked(HookType::After, &"oops");
        assert_eq!(err.hook(), HookType::After);
        assert_eq!(err.reason(), "oops");
    }
}
