// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Step`] node and its outcome.

use derive_more::with_trait::Display;

use crate::{error::Result, walker::Visitor};

use super::{Exception, Location, MultilineArg};

/// Outcome of a [`Step`], computed upstream by a [`Runtime`].
///
/// [`Runtime`]: crate::Runtime
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum Status {
    /// Step definition ran successfully.
    #[display("passed")]
    Passed,

    /// Step definition failed, see [`Step::exception()`].
    #[display("failed")]
    Failed,

    /// Step wasn't run, usually because a previous one failed.
    #[default]
    #[display("skipped")]
    Skipped,

    /// No step definition matches the step.
    #[display("undefined")]
    Undefined,

    /// Step definition is marked as not yet implemented.
    #[display("pending")]
    Pending,
}

/// Whether a [`Step`] is actually run or only reported.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Invocation {
    /// [`Runtime`] is asked to run the step before it's reported.
    ///
    /// [`Runtime`]: crate::Runtime
    #[default]
    Run,

    /// Step is reported with its current [`Status`], but never run.
    Skip,
}

/// Name of a capturing group of a step definition pattern.
pub type CaptureName = Option<String>;

/// Opaque handle to the step definition a [`Step`] matched.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{text}")]
pub struct StepMatch {
    text: String,
    pattern: Option<String>,
    captures: Vec<(CaptureName, String)>,
    location: Option<Location>,
}

impl StepMatch {
    /// Creates a new [`StepMatch`] of the given step `text` against a step
    /// definition `pattern`.
    #[must_use]
    pub fn new(text: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pattern: Some(pattern.into()),
            captures: Vec::new(),
            location: None,
        }
    }

    /// Creates a new [`StepMatch`] of a `text` no step definition matches.
    #[must_use]
    pub fn undefined(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pattern: None,
            captures: Vec::new(),
            location: None,
        }
    }

    /// Attaches the captured groups.
    #[must_use]
    pub fn with_captures(mut self, captures: Vec<(CaptureName, String)>) -> Self {
        self.captures = captures;
        self
    }

    /// Attaches the location of the matched step definition.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Step text as written in the feature file.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Pattern of the matched step definition.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Whether no step definition matched.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        self.pattern.is_none()
    }

    /// Captured groups, the whole match excluded.
    #[must_use]
    pub fn captures(&self) -> &[(CaptureName, String)] {
        &self.captures
    }

    /// Returns the value of a named capture group, if it exists.
    #[must_use]
    pub fn named_capture(&self, name: &str) -> Option<&str> {
        self.captures
            .iter()
            .find(|(n, _)| n.as_deref() == Some(name))
            .map(|(_, v)| v.as_str())
    }

    /// Location of the matched step definition, if known.
    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

/// Single step of a [`Scenario`].
///
/// [`Status`] and [`Exception`] are always consistent: an [`Exception`] is
/// present if and only if the [`Status`] is [`Status::Failed`].
///
/// [`Scenario`]: super::Scenario
#[derive(Clone, Debug)]
pub struct Step {
    keyword: String,
    step_match: StepMatch,
    multiline_arg: Option<MultilineArg>,
    status: Status,
    exception: Option<Exception>,
    source_indent: usize,
    background: bool,
    location: Location,
    invocation: Invocation,
}

impl Step {
    /// Creates a new [`Status::Skipped`] [`Step`].
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        step_match: StepMatch,
        location: Location,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            step_match,
            multiline_arg: None,
            status: Status::default(),
            exception: None,
            source_indent: 0,
            background: false,
            location,
            invocation: Invocation::default(),
        }
    }

    /// Attaches a [`MultilineArg`].
    #[must_use]
    pub fn with_multiline_arg(mut self, arg: impl Into<MultilineArg>) -> Self {
        self.multiline_arg = Some(arg.into());
        self
    }

    /// Sets the indentation formatters pad the step with before printing its
    /// [`Location`].
    #[must_use]
    pub fn with_source_indent(mut self, indent: usize) -> Self {
        self.source_indent = indent;
        self
    }

    /// Marks this [`Step`] as coming from a `Background`.
    #[must_use]
    pub fn in_background(mut self) -> Self {
        self.background = true;
        self
    }

    /// Sets a non-failed [`Status`] of this [`Step`].
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.set_status(status);
        self
    }

    /// Marks this [`Step`] as [`Status::Failed`] with the given [`Exception`].
    #[must_use]
    pub fn failed_with(mut self, exception: Exception) -> Self {
        self.fail(exception);
        self
    }

    /// Records a [`Status`], dropping any [`Exception`].
    ///
    /// [`Status::Failed`] requires an [`Exception`], so it's recorded as a
    /// failure with an empty message. Prefer [`Step::fail()`] for failures.
    pub fn set_status(&mut self, status: Status) {
        if status == Status::Failed {
            self.fail(Exception::new(""));
        } else {
            self.status = status;
            self.exception = None;
        }
    }

    /// Records a failure.
    pub fn fail(&mut self, exception: Exception) {
        self.status = Status::Failed;
        self.exception = Some(exception);
    }

    /// Replaces the [`StepMatch`], once a [`Runtime`] matched the step.
    ///
    /// [`Runtime`]: crate::Runtime
    pub fn set_step_match(&mut self, step_match: StepMatch) {
        self.step_match = step_match;
    }

    /// Makes this [`Step`] reported only, never run.
    pub fn skip_invocation(&mut self) {
        self.invocation = Invocation::Skip;
    }

    /// Keyword of this [`Step`], e.g. `Given `.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// [`StepMatch`] of this [`Step`].
    #[must_use]
    pub const fn step_match(&self) -> &StepMatch {
        &self.step_match
    }

    /// [`MultilineArg`] of this [`Step`], if any.
    #[must_use]
    pub const fn multiline_arg(&self) -> Option<&MultilineArg> {
        self.multiline_arg.as_ref()
    }

    /// [`Status`] of this [`Step`].
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// [`Exception`] of a [`Status::Failed`] [`Step`].
    #[must_use]
    pub const fn exception(&self) -> Option<&Exception> {
        self.exception.as_ref()
    }

    /// Indentation to pad this [`Step`] with before its [`Location`].
    #[must_use]
    pub const fn source_indent(&self) -> usize {
        self.source_indent
    }

    /// Whether this [`Step`] comes from a `Background`.
    #[must_use]
    pub const fn is_background(&self) -> bool {
        self.background
    }

    /// [`Location`] of this [`Step`] in its feature file.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// [`Invocation`] mode of this [`Step`].
    #[must_use]
    pub const fn invocation(&self) -> Invocation {
        self.invocation
    }

    /// Hands this [`Step`] to the `visitor`, which runs and reports it.
    ///
    /// # Errors
    ///
    /// Propagates whatever the `visitor` fails with.
    pub fn accept(&mut self, visitor: &mut dyn Visitor) -> Result<()> {
        visitor.visit_step(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step() -> Step {
        Step::new(
            "Given ",
            StepMatch::new("I have 3 cukes", r"^I have (?<count>\d+) cukes$")
                .with_captures(vec![(Some("count".into()), "3".into())]),
            Location::new("cukes.feature", 4),
        )
    }

    #[test]
    fn new_step_is_skipped_and_runnable() {
        let step = step();
        assert_eq!(step.status(), Status::Skipped);
        assert_eq!(step.invocation(), Invocation::Run);
        assert!(step.exception().is_none());
        assert!(!step.is_background());
    }

    #[test]
    fn exception_present_iff_failed() {
        let mut step = step().failed_with(Exception::new("boom"));
        assert_eq!(step.status(), Status::Failed);
        assert_eq!(step.exception().map(Exception::message), Some("boom"));

        step.set_status(Status::Passed);
        assert_eq!(step.status(), Status::Passed);
        assert!(step.exception().is_none());

        step.set_status(Status::Failed);
        assert_eq!(step.status(), Status::Failed);
        assert!(step.exception().is_some());
    }

    #[test]
    fn step_match_lookups() {
        let step = step();
        assert_eq!(step.step_match().named_capture("count"), Some("3"));
        assert_eq!(step.step_match().named_capture("other"), None);
        assert!(!step.step_match().is_undefined());
        assert!(StepMatch::undefined("nope").is_undefined());
        assert_eq!(step.step_match().to_string(), "I have 3 cukes");
    }

    #[test]
    fn status_displays_lowercase() {
        assert_eq!(Status::Undefined.to_string(), "undefined");
        assert_eq!(Status::Pending.to_string(), "pending");
    }
}
