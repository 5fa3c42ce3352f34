// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of a tree walk, organized by origin.
//!
//! - [`core`] - [`WalkError`] aborting a walk
//! - [`listener`] - failures of [`Listener`] handlers
//! - [`hook`] - failures of [`Runtime`] hooks
//! - [`utilities`] - shared helpers
//!
//! [`Listener`]: crate::Listener
//! [`Runtime`]: crate::Runtime

pub mod core;
pub mod hook;
pub mod listener;
pub mod utilities;

pub use self::{
    core::{Result, WalkError},
    hook::{HookError, HookType},
    listener::{ListenerError, ListenerFailure},
};

#[cfg(test)]
mod integration_tests {
    use std::error::Error as _;

    use crate::event::{Message, Name};

    use super::*;

    #[test]
    fn conversions_into_walk_error() {
        let err: WalkError = HookError::before("nope").into();
        assert!(err.is_hook_error());
        assert_eq!(err.to_string(), "Before hook failed: nope");

        let err: WalkError = ListenerFailure::new(
            0,
            Message::on(Name::PUTS),
            ListenerError::custom("closed"),
        )
        .into();
        assert!(err.is_listener_failure());
        assert_eq!(err.to_string(), "Listener #0 failed on `puts`: closed");
    }

    #[test]
    fn error_source_chains() {
        let failure = ListenerFailure::new(
            1,
            Message::after(Name::STEP_NAME),
            ListenerError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "root cause",
            )),
        );
        let err = WalkError::Listener(failure);

        let source = err.source().expect("listener failure");
        let listener_err = source.source().expect("listener error");
        assert!(listener_err.to_string().contains("I/O error"));
        let root = listener_err.source().expect("io error");
        assert!(root.to_string().contains("root cause"));
    }
}
