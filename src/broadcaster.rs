// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fan-out of [`Event`]s to registered [`Listener`]s.
//!
//! [`Listener`]: crate::Listener

use std::{
    mem,
    panic::{self, AssertUnwindSafe},
};

use sealed::sealed;

use crate::{
    config::ListenerFailures,
    error::{ListenerError, ListenerFailure, Result, WalkError},
    event::{Event, Message, Name},
    listener::Listeners,
    runtime::Runtime,
    walker::TreeWalker,
};

/// Delivers [`Message`]s to [`Listeners`] in their registration order,
/// applying the configured [`ListenerFailures`] policy.
#[derive(Debug)]
pub struct Broadcaster {
    listeners: Listeners,
    policy: ListenerFailures,
    failures: Vec<ListenerFailure>,
}

impl Broadcaster {
    /// Creates a new [`Broadcaster`] owning the given [`Listeners`].
    #[must_use]
    pub const fn new(listeners: Listeners, policy: ListenerFailures) -> Self {
        Self {
            listeners,
            policy,
            failures: Vec::new(),
        }
    }

    /// Registered [`Listeners`].
    #[must_use]
    pub const fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// [`ListenerFailures`] policy of this [`Broadcaster`].
    #[must_use]
    pub const fn policy(&self) -> ListenerFailures {
        self.policy
    }

    /// [`ListenerFailure`]s isolated so far.
    #[must_use]
    pub fn failures(&self) -> &[ListenerFailure] {
        &self.failures
    }

    /// Takes out the [`ListenerFailure`]s isolated so far.
    pub fn take_failures(&mut self) -> Vec<ListenerFailure> {
        mem::take(&mut self.failures)
    }

    /// Sends the `message` about the `event` to every [`Listener`] responding
    /// to it.
    ///
    /// # Errors
    ///
    /// With [`ListenerFailures::Propagate`], returns the first failure of a
    /// [`Listener`], the remaining ones not being notified.
    ///
    /// [`Listener`]: crate::Listener
    pub fn send(&mut self, message: &Message, event: &Event<'_>) -> Result<()> {
        self.deliver(message, event, usize::MAX, false).1
    }

    /// Sends `before_<name>` about the `event`.
    ///
    /// If a [`Listener`] failure is propagated, every [`Listener`] reached so
    /// far is sent `after_<name>` before the failure is returned.
    ///
    /// [`Listener`]: crate::Listener
    pub(crate) fn open(&mut self, name: &Name, event: &Event<'_>) -> Result<()> {
        let before = Message::before(name.clone());
        let (reached, res) = self.deliver(&before, event, usize::MAX, false);
        if res.is_err() {
            let after = Message::after(name.clone());
            if let (_, Err(e)) = self.deliver(&after, event, reached, true) {
                log_shadowed(&e);
            }
        }
        res
    }

    /// Sends `after_<name>` about the `event` to every [`Listener`], returning
    /// the first propagated failure once all of them are reached.
    ///
    /// [`Listener`]: crate::Listener
    pub(crate) fn close(&mut self, name: Name, event: &Event<'_>) -> Result<()> {
        self.deliver(&Message::after(name), event, usize::MAX, true).1
    }

    /// Sends the `message` to the first `limit` [`Listener`]s.
    ///
    /// Returns how many [`Listener`]s were reached along with the first
    /// propagated failure. Unless `exhaustive`, delivery stops at that
    /// failure.
    ///
    /// [`Listener`]: crate::Listener
    fn deliver(
        &mut self,
        message: &Message,
        event: &Event<'_>,
        limit: usize,
        exhaustive: bool,
    ) -> (usize, Result<()>) {
        let mut reached = 0;
        let mut propagated = None;
        let mut isolated = Vec::new();
        for (index, listener) in
            self.listeners.iter_mut().enumerate().take(limit)
        {
            reached = index + 1;
            if !listener.responds_to(message) {
                #[cfg(feature = "tracing")]
                tracing::trace!(index, %message, "listener skipped");
                continue;
            }

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                listener.on_event(message, event)
            }))
            .unwrap_or_else(|payload| Err(ListenerError::panicked(&*payload)));

            if let Err(source) = outcome {
                let failure = ListenerFailure::new(index, message.clone(), source);
                match self.policy {
                    ListenerFailures::Isolate => isolated.push(failure),
                    ListenerFailures::Propagate if propagated.is_some() => {
                        log_shadowed(&failure.into());
                    }
                    ListenerFailures::Propagate => {
                        propagated = Some(failure);
                        if !exhaustive {
                            break;
                        }
                    }
                }
            }
        }
        for failure in isolated {
            self.isolate(failure);
        }
        (reached, propagated.map_or(Ok(()), |f| Err(f.into())))
    }

    /// Records the `failure` and reports it to the other [`Listener`]s.
    ///
    /// [`Listener`]: crate::Listener
    fn isolate(&mut self, failure: ListenerFailure) {
        log_isolated(&failure);

        let message = Message::on(Name::LISTENER_FAILED);
        let event = Event::ListenerFailed(&failure);
        for (index, listener) in self.listeners.iter_mut().enumerate() {
            if index == failure.index() || !listener.responds_to(&message) {
                continue;
            }
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                listener.on_event(&message, &event)
            }))
            .unwrap_or_else(|payload| Err(ListenerError::panicked(&*payload)));
            if let Err(e) = outcome {
                log_unreported(index, &e);
            }
        }

        self.failures.push(failure);
    }
}

/// Bracketed and atomic dispatch of [`Event`]s.
///
/// Implemented by the [`Broadcaster`] itself and by [`TreeWalker`], whose
/// `work` closures receive the walker back.
///
/// [`TreeWalker`]: crate::TreeWalker
#[sealed]
pub trait Broadcast {
    /// [`Broadcaster`] to dispatch through.
    fn broadcaster(&mut self) -> &mut Broadcaster;

    /// Delivers a single `<name>` [`Message`] about the `event`.
    ///
    /// # Errors
    ///
    /// See [`Broadcaster::send()`].
    fn atomic(&mut self, event: Event<'_>) -> Result<()> {
        self.broadcaster().send(&Message::on(event.name()), &event)
    }

    /// Delivers `before_<name>`, runs the `work`, then delivers
    /// `after_<name>` about the `event`.
    ///
    /// `after_<name>` is delivered even if the `work` fails or panics. A
    /// panic is resumed once it's delivered. Every listener sent
    /// `before_<name>` is sent `after_<name>` too, whatever the failures of
    /// the others.
    ///
    /// # Errors
    ///
    /// The `work` error, if any, otherwise the first propagated failure of a
    /// listener. A failed `before_<name>` delivery closes the bracket for the
    /// listeners already reached and returns, without running the `work`.
    fn bracketed<T, F>(&mut self, event: Event<'_>, work: F) -> Result<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let name = event.name();
        self.broadcaster().open(&name, &event)?;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| work(self)));
        let after = self.broadcaster().close(name, &event);

        match outcome {
            Ok(Ok(value)) => after.map(|()| value),
            Ok(Err(e)) => {
                if let Err(after_err) = after {
                    log_shadowed(&after_err);
                }
                Err(e)
            }
            Err(payload) => {
                if let Err(after_err) = after {
                    log_shadowed(&after_err);
                }
                panic::resume_unwind(payload)
            }
        }
    }
}

#[sealed]
impl Broadcast for Broadcaster {
    fn broadcaster(&mut self) -> &mut Broadcaster {
        self
    }
}

#[sealed]
impl<R: Runtime + ?Sized + 'static> Broadcast for TreeWalker<R> {
    fn broadcaster(&mut self) -> &mut Broadcaster {
        self.broadcaster_mut()
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_isolated(failure: &ListenerFailure) {
    #[cfg(feature = "tracing")]
    tracing::warn!(%failure, "listener failure isolated");
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_unreported(index: usize, err: &ListenerError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(index, error = %err, "listener failed on `listener_failed`");
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_shadowed(err: &WalkError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %err, "after phase failed while unwinding");
}
