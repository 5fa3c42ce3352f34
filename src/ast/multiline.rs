// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Multiline arguments of a step.

use derive_more::with_trait::{Display, From};

use crate::{error::Result, event::Event, walker::Visitor};

use super::{Accept, DataTable};

/// Doc string argument of a step.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{content}")]
pub struct DocString {
    /// Text of this [`DocString`], without the delimiters.
    pub content: String,

    /// Content type annotated after the opening delimiter, e.g. `json`.
    pub content_type: Option<String>,
}

impl DocString {
    /// Creates a new [`DocString`] without a content type.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: None,
        }
    }

    /// Sets the content type of this [`DocString`].
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl Accept for DocString {
    fn accept(&self, visitor: &mut dyn Visitor) -> Result<()> {
        visitor.notify(Event::DocString(self))
    }
}

/// Multiline argument of a step.
#[derive(Clone, Debug, Eq, From, PartialEq)]
pub enum MultilineArg {
    /// [`DataTable`] argument.
    Table(DataTable),

    /// [`DocString`] argument.
    DocString(DocString),
}

impl MultilineArg {
    /// Returns the [`DataTable`] of this argument, if it's one.
    #[must_use]
    pub const fn as_table(&self) -> Option<&DataTable> {
        match self {
            Self::Table(t) => Some(t),
            Self::DocString(_) => None,
        }
    }

    /// Returns the [`DocString`] of this argument, if it's one.
    #[must_use]
    pub const fn as_doc_string(&self) -> Option<&DocString> {
        match self {
            Self::DocString(d) => Some(d),
            Self::Table(_) => None,
        }
    }
}

impl Accept for MultilineArg {
    fn accept(&self, visitor: &mut dyn Visitor) -> Result<()> {
        match self {
            Self::Table(t) => t.accept(visitor),
            Self::DocString(d) => d.accept(visitor),
        }
    }
}
