// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`tracing`] integration.

use crate::event::{Event, Message};

use super::{Listener, Result};

/// [`Listener`] logging every [`Message`] it receives at the `DEBUG` level.
///
/// Register it first to see the messages before other [`Listener`]s handle
/// them.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl Listener for Trace {
    fn on_event(&mut self, message: &Message, event: &Event<'_>) -> Result {
        tracing::debug!(%message, ?event, "walker event");
        Ok(())
    }
}
