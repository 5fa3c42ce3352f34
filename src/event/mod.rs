// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Key occurrences in a tree walk over a [Cucumber] scenario.
//!
//! The top-level enum here is [`Event`]. Each of its variants carries a typed
//! payload borrowed from the walked nodes, and resolves to an event [`Name`].
//! Listeners are asked to handle a [`Message`]: a [`Name`] in a [`Phase`].
//!
//! An event is either atomic (a single `<name>` message) or bracketed
//! (`before_<name>`, some nested work, then `after_<name>`). The shape is
//! chosen by the emitting call site, see [`Visitor`].
//!
//! [`Visitor`]: crate::Visitor
//! [Cucumber]: https://cucumber.io

pub mod core;
pub mod custom;
pub mod embed;
pub mod name;

pub use self::{
    core::Event,
    custom::{Arg, Custom},
    embed::Embed,
    name::{InvalidMessage, Message, Name, Phase, VISIT_PREFIX},
};
