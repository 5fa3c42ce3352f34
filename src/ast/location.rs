// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Source locations of walked nodes.

use std::sync::Arc;

use derive_more::with_trait::Display;

/// Location of a node in a `.feature` file (or of a step definition).
///
/// Displays as `path:line`, the form formatters print next to a step.
#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{path}:{line}")]
pub struct Location {
    /// Path to the file.
    pub path: Arc<str>,

    /// Line of the file, starting from `1`.
    pub line: usize,

    /// Column of the file, `0` when unknown.
    pub column: usize,
}

impl Location {
    /// Creates a new [`Location`] with an unknown column.
    #[must_use]
    pub fn new(path: impl Into<Arc<str>>, line: usize) -> Self {
        Self {
            path: path.into(),
            line,
            column: 0,
        }
    }

    /// Sets the column of this [`Location`].
    #[must_use]
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Returns the file name out of the [`Location::path`].
    #[must_use]
    pub fn filename(&self) -> &str {
        self.path.rsplit(['/', '\\']).next().unwrap_or(&*self.path)
    }

    /// Returns a short `filename:line` representation.
    #[must_use]
    pub fn short(&self) -> String {
        format!("{}:{}", self.filename(), self.line)
    }
}
