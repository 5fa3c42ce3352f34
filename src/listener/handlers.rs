// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Listener`] built out of closures registered per [`Message`].

use std::fmt;

use linked_hash_map::LinkedHashMap;

use crate::event::{Event, InvalidMessage, Message};

use super::{Listener, Result};

/// Closure handling a single [`Message`].
type Handler = Box<dyn FnMut(&Event<'_>) -> Result>;

/// [`Listener`] responding only to the [`Message`]s it has a handler for.
///
/// ```rust
/// # use std::{cell::RefCell, rc::Rc};
/// # use cucumber_walker::{event::{Event, Message, Name}, listener::Handlers};
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let log = Rc::clone(&seen);
///
/// let handlers = Handlers::new()
///     .on(Message::on(Name::PUTS), move |ev| {
///         if let Event::Puts(lines) = ev {
///             log.borrow_mut().extend(lines.iter().cloned());
///         }
///         Ok(())
///     })
///     .parsed("after_step_result", |_| Ok(()))
///     .unwrap();
///
/// assert_eq!(handlers.len(), 2);
/// ```
#[derive(Default)]
pub struct Handlers {
    handlers: LinkedHashMap<Message, Handler>,
}

impl Handlers {
    /// Creates new empty [`Handlers`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a `handler` of the given [`Message`], replacing the previous
    /// one, if any.
    #[must_use]
    pub fn on<F>(mut self, message: Message, handler: F) -> Self
    where
        F: FnMut(&Event<'_>) -> Result + 'static,
    {
        _ = self.handlers.insert(message, Box::new(handler));
        self
    }

    /// Registers a `handler` of the [`Message`] parsed out of a handler name
    /// like `before_step_result`.
    ///
    /// # Errors
    ///
    /// If the `message` isn't a valid handler name.
    pub fn parsed<F>(
        self,
        message: &str,
        handler: F,
    ) -> std::result::Result<Self, InvalidMessage>
    where
        F: FnMut(&Event<'_>) -> Result + 'static,
    {
        Ok(self.on(message.parse()?, handler))
    }

    /// Registered [`Message`]s in registration order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.handlers.keys()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.handlers.keys().map(ToString::to_string))
            .finish()
    }
}

impl Listener for Handlers {
    fn responds_to(&self, message: &Message) -> bool {
        self.handlers.contains_key(message)
    }

    fn on_event(&mut self, message: &Message, event: &Event<'_>) -> Result {
        self.handlers
            .get_mut(message)
            .map_or(Ok(()), |handler| handler(event))
    }
}
