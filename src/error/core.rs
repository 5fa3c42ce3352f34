// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Core error type of a tree walk.
//!
//! Step failures never end up here: they are data carried by a [`Step`] and
//! reported to listeners as events.
//!
//! [`Step`]: crate::ast::Step

use derive_more::with_trait::{Display, Error, From};

use super::{HookError, ListenerFailure};

/// Error aborting a tree walk.
#[derive(Debug, Display, Error, From)]
pub enum WalkError {
    /// [`Listener`] failed while the walker propagates listener failures.
    ///
    /// [`Listener`]: crate::Listener
    #[display("{_0}")]
    Listener(ListenerFailure),

    /// [`Runtime`] hook failed.
    ///
    /// [`Runtime`]: crate::Runtime
    #[display("{_0}")]
    Hook(HookError),
}

/// Result type alias for walker operations.
pub type Result<T> = std::result::Result<T, WalkError>;

impl WalkError {
    /// Returns true if this error originates from a [`Listener`].
    ///
    /// [`Listener`]: crate::Listener
    #[must_use]
    pub fn is_listener_failure(&self) -> bool {
        matches!(self, Self::Listener(_))
    }

    /// Returns true if this error originates from a [`Runtime`] hook.
    ///
    /// [`Runtime`]: crate::Runtime
    #[must_use]
    pub fn is_hook_error(&self) -> bool {
        matches!(self, Self::Hook(_))
    }
}
