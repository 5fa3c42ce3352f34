// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Events of node kinds the [`TreeWalker`] has no explicit visit method for.
//!
//! [`TreeWalker`]: crate::TreeWalker

use std::{any::Any, borrow::Cow, sync::Arc};

use super::Name;

/// Opaque argument of a [`Custom`] event.
pub type Arg = Arc<dyn Any + Send + Sync + 'static>;

/// Event forwarded generically to listeners.
///
/// Whether it's delivered as atomic or bracketed is decided by the caller:
/// [`Visitor::notify()`] or [`Visitor::broadcast()`].
///
/// [`Visitor::broadcast()`]: crate::Visitor::broadcast
/// [`Visitor::notify()`]: crate::Visitor::notify
#[derive(Clone, Debug)]
pub struct Custom {
    name: Name,
    args: Vec<Arg>,
}

impl Custom {
    /// Creates a new [`Custom`] event out of a visitor method name.
    ///
    /// The name is resolved via [`Name::resolve()`], so `visit_background`
    /// becomes `background`.
    #[must_use]
    pub fn new(method: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Name::resolve(method),
            args: Vec::new(),
        }
    }

    /// Appends an argument to this event.
    #[must_use]
    pub fn arg<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.args.push(Arc::new(value));
        self
    }

    /// [`Name`] of this event.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Ordered arguments of this event.
    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Returns the argument at `index` if it's of type `T`.
    #[must_use]
    pub fn arg_as<T: Any>(&self, index: usize) -> Option<&T> {
        self.args.get(index)?.downcast_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_argument_order_and_types() {
        let ev = Custom::new("visit_background").arg("Login").arg(3_usize);

        assert_eq!(ev.name().as_str(), "background");
        assert_eq!(ev.args().len(), 2);
        assert_eq!(ev.arg_as::<&str>(0), Some(&"Login"));
        assert_eq!(ev.arg_as::<usize>(1), Some(&3));
        assert_eq!(ev.arg_as::<String>(0), None);
        assert_eq!(ev.arg_as::<usize>(5), None);
    }
}
