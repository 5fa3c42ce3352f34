// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Event names and the [`Message`]s listeners are asked to handle.

use std::{borrow::Cow, str::FromStr};

use derive_more::with_trait::{Display, Error};
use lazy_regex::regex_captures;

/// Prefix stripped from visitor method names by [`Name::resolve()`].
pub const VISIT_PREFIX: &str = "visit_";

/// Name of an [`Event`].
///
/// The set of names is open: the constants below cover the events emitted by
/// the [`TreeWalker`] itself, while [`Custom`] events bring their own.
///
/// [`Custom`]: super::Custom
/// [`Event`]: super::Event
/// [`TreeWalker`]: crate::TreeWalker
#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{_0}")]
pub struct Name(Cow<'static, str>);

impl Name {
    /// Result of a single [`Step`](crate::ast::Step).
    pub const STEP_RESULT: Self = Self::from_static("step_result");

    /// Name line of a [`Step`](crate::ast::Step).
    pub const STEP_NAME: Self = Self::from_static("step_name");

    /// [`MultilineArg`](crate::ast::MultilineArg) of a step.
    pub const MULTILINE_ARG: Self = Self::from_static("multiline_arg");

    /// [`Exception`](crate::ast::Exception) of a failed step.
    pub const EXCEPTION: Self = Self::from_static("exception");

    /// [`DataTable`](crate::ast::DataTable) argument.
    pub const TABLE: Self = Self::from_static("table");

    /// Row of a [`DataTable`](crate::ast::DataTable).
    pub const TABLE_ROW: Self = Self::from_static("table_row");

    /// Cell of a [`DataTable`](crate::ast::DataTable) row.
    pub const TABLE_CELL_VALUE: Self = Self::from_static("table_cell_value");

    /// [`DocString`](crate::ast::DocString) argument.
    pub const DOC_STRING: Self = Self::from_static("doc_string");

    /// Free-form output.
    pub const PUTS: Self = Self::from_static("puts");

    /// Out-of-band attachment.
    pub const EMBED: Self = Self::from_static("embed");

    /// Diagnostic about an isolated listener failure.
    pub const LISTENER_FAILED: Self = Self::from_static("listener_failed");

    /// Creates a [`Name`] used as is.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Resolves a [`Name`] out of a visitor method name, stripping its leading
    /// [`VISIT_PREFIX`] if any.
    ///
    /// ```rust
    /// # use cucumber_walker::event::Name;
    /// assert_eq!(Name::resolve("visit_step_name"), Name::STEP_NAME);
    /// assert_eq!(Name::resolve("puts"), Name::PUTS);
    /// ```
    #[must_use]
    pub fn resolve(method: impl Into<Cow<'static, str>>) -> Self {
        match method.into() {
            Cow::Borrowed(m) => Self(Cow::Borrowed(
                m.strip_prefix(VISIT_PREFIX).unwrap_or(m),
            )),
            Cow::Owned(m) => Self(Cow::Owned(match m.strip_prefix(VISIT_PREFIX) {
                Some(stripped) => stripped.to_owned(),
                None => m,
            })),
        }
    }

    /// Returns this [`Name`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Phase of an [`Event`] a [`Message`] is sent in.
///
/// [`Event`]: super::Event
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Phase {
    /// Opening notification of a bracketed event.
    Before,

    /// Single notification of an atomic event.
    On,

    /// Closing notification of a bracketed event.
    After,
}

impl Phase {
    /// Prefix this [`Phase`] adds to an event [`Name`].
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Before => "before_",
            Self::On => "",
            Self::After => "after_",
        }
    }
}

/// Handler a [`Listener`] is asked to run: an event [`Name`] in a [`Phase`].
///
/// Displays as the handler name, e.g. `before_step_result` or `puts`.
///
/// [`Listener`]: crate::Listener
#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{}{name}", phase.prefix())]
pub struct Message {
    phase: Phase,
    name: Name,
}

impl Message {
    /// Creates a new [`Message`].
    #[must_use]
    pub const fn new(phase: Phase, name: Name) -> Self {
        Self { phase, name }
    }

    /// Creates a new [`Phase::Before`] [`Message`].
    #[must_use]
    pub const fn before(name: Name) -> Self {
        Self::new(Phase::Before, name)
    }

    /// Creates a new [`Phase::On`] [`Message`].
    #[must_use]
    pub const fn on(name: Name) -> Self {
        Self::new(Phase::On, name)
    }

    /// Creates a new [`Phase::After`] [`Message`].
    #[must_use]
    pub const fn after(name: Name) -> Self {
        Self::new(Phase::After, name)
    }

    /// [`Phase`] of this [`Message`].
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Event [`Name`] of this [`Message`].
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }
}

/// Error of parsing a [`Message`] out of a handler name.
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
#[display("Invalid listener message: `{_0}`")]
pub struct InvalidMessage(#[error(not(source))] String);

impl FromStr for Message {
    type Err = InvalidMessage;

    /// Parses handler names like `before_step_result`, `puts` or
    /// `after_table_row`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, prefix, name) =
            regex_captures!(r"^(before_|after_)?([a-z][a-z0-9_]*)$", s)
                .ok_or_else(|| InvalidMessage(s.to_owned()))?;
        let phase = match prefix {
            "before_" => Phase::Before,
            "after_" => Phase::After,
            _ => Phase::On,
        };
        Ok(Self::new(phase, Name(Cow::Owned(name.to_owned()))))
    }
}
