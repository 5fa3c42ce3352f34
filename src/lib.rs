// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tree walker of [Cucumber] scenarios, executing their steps and reporting
//! every visited node to pluggable listeners (formatters, reporters).
//!
//! A [`TreeWalker`] visits a [`Scenario`] depth-first. Each node becomes an
//! [`Event`], delivered to every registered [`Listener`] in order, either as a
//! single atomic message (`puts`) or as a `before_`/`after_` bracket around
//! the nested events (`before_step_result` … `after_step_result`).
//!
//! [`Scenario`]: ast::Scenario
//! [Cucumber]: https://cucumber.io

#![deny(nonstandard_style, rustdoc::all, trivial_casts, trivial_numeric_casts)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(missing_docs, unused_results)]

pub mod ast;
pub mod broadcaster;
pub mod config;
pub mod error;
pub mod event;
pub mod listener;
pub mod runtime;
pub mod walker;

pub use gherkin;

#[doc(inline)]
pub use self::{
    broadcaster::{Broadcast, Broadcaster},
    config::{Config, ListenerFailures},
    error::{Result, WalkError},
    event::Event,
    listener::{Listener, Listeners},
    runtime::Runtime,
    walker::{TreeWalker, Visitor},
};
