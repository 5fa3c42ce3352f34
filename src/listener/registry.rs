// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordered registry of [`Listener`]s.

use std::fmt;

use super::Listener;

/// Ordered collection of [`Listener`]s, fixed once a walk starts.
///
/// Every event is delivered to the [`Listener`]s in their registration order.
#[derive(Default)]
pub struct Listeners(Vec<Box<dyn Listener>>);

impl Listeners {
    /// Creates an empty [`Listeners`] registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the given [`Listener`] after the already registered ones.
    #[must_use]
    pub fn with<L: Listener + 'static>(mut self, listener: L) -> Self {
        self.0.push(Box::new(listener));
        self
    }

    /// Number of registered [`Listener`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no [`Listener`] is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the [`Listener`]s in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Listener> {
        self.0.iter().map(|l| &**l)
    }

    pub(crate) fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = &mut (dyn Listener + 'static)> {
        self.0.iter_mut().map(|l| &mut **l)
    }
}

impl FromIterator<Box<dyn Listener>> for Listeners {
    fn from_iter<I: IntoIterator<Item = Box<dyn Listener>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}
