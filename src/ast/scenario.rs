// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Scenario`] node and its ordered [`Steps`].

use derive_more::with_trait::{Deref, DerefMut, From};

use crate::{error::Result, walker::Visitor};

use super::{Location, Status, Step};

/// Ordered sequence of [`Step`]s.
#[derive(Clone, Debug, Default, Deref, DerefMut, From)]
pub struct Steps(Vec<Step>);

impl Steps {
    /// Whether any of these [`Step`]s has failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.0.iter().any(|s| s.status() == Status::Failed)
    }

    /// Makes all these [`Step`]s reported only, never run.
    pub fn skip_invocation(&mut self) {
        self.0.iter_mut().for_each(Step::skip_invocation);
    }

    /// Hands every [`Step`] to the `visitor` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first error of the `visitor`.
    pub fn accept(&mut self, visitor: &mut dyn Visitor) -> Result<()> {
        for step in &mut self.0 {
            step.accept(visitor)?;
        }
        Ok(())
    }
}

impl FromIterator<Step> for Steps {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Scenario to be executed by a [`TreeWalker`].
///
/// [`TreeWalker`]: crate::TreeWalker
#[derive(Clone, Debug)]
pub struct Scenario {
    name: String,
    steps: Steps,
    failed: bool,
    location: Option<Location>,
}

impl Scenario {
    /// Creates a new [`Scenario`].
    #[must_use]
    pub fn new(name: impl Into<String>, steps: impl Into<Steps>) -> Self {
        Self {
            name: name.into(),
            steps: steps.into(),
            failed: false,
            location: None,
        }
    }

    /// Attaches the [`Location`] of this [`Scenario`].
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Marks this [`Scenario`] as failed, e.g. by a failed hook.
    pub fn mark_failed(&mut self) {
        self.failed = true;
    }

    /// Whether this [`Scenario`] was marked as failed or has a failed
    /// [`Step`].
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed || self.steps.failed()
    }

    /// Makes all the [`Step`]s of this [`Scenario`] reported only.
    pub fn skip_invocation(&mut self) {
        self.steps.skip_invocation();
    }

    /// Name of this [`Scenario`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// [`Location`] of this [`Scenario`], if known.
    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// [`Steps`] of this [`Scenario`].
    #[must_use]
    pub const fn steps(&self) -> &Steps {
        &self.steps
    }

    /// Mutable [`Steps`] of this [`Scenario`].
    #[must_use]
    pub fn steps_mut(&mut self) -> &mut Steps {
        &mut self.steps
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Exception, Invocation, StepMatch};

    use super::*;

    fn step(text: &str, line: usize) -> Step {
        Step::new("Given ", StepMatch::undefined(text), Location::new("s.feature", line))
    }

    #[test]
    fn failed_is_derived_from_steps() {
        let mut scenario = Scenario::new(
            "eating",
            vec![
                step("one", 2).with_status(Status::Passed),
                step("two", 3).failed_with(Exception::new("boom")),
                step("three", 4),
            ],
        );
        assert!(scenario.failed());

        scenario.steps_mut()[1].set_status(Status::Passed);
        assert!(!scenario.failed());

        scenario.mark_failed();
        assert!(scenario.failed());
    }

    #[test]
    fn skip_invocation_marks_every_step() {
        let mut scenario = Scenario::new("eating", vec![step("one", 2), step("two", 3)]);
        scenario.skip_invocation();
        assert!(scenario
            .steps()
            .iter()
            .all(|s| s.invocation() == Invocation::Skip));
    }
}
