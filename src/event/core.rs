// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The [`Event`] tagged variant.

use crate::{
    ast::{DataTable, DocString, Exception, MultilineArg, Status, Step},
    error::ListenerFailure,
};

use super::{Custom, Embed, Name};

/// Occurrence during a tree walk, borrowing its payload from the walked nodes.
///
/// Events are transient: they're built right before a dispatch and dropped
/// right after it.
#[derive(Clone, Copy, Debug)]
pub enum Event<'a> {
    /// Result of a [`Step`], wrapping its name, argument and exception.
    StepResult(&'a Step),

    /// Name line of a [`Step`].
    StepName(&'a Step),

    /// [`MultilineArg`] of a [`Step`], wrapping its own node events.
    MultilineArg(&'a MultilineArg),

    /// [`Exception`] of a failed [`Step`].
    Exception {
        /// Failure details.
        exception: &'a Exception,

        /// [`Status`] of the failed [`Step`].
        status: Status,
    },

    /// [`DataTable`] argument, wrapping its rows.
    Table(&'a DataTable),

    /// Row of a [`DataTable`], wrapping its cells.
    TableRow {
        /// Index of the row, header included.
        index: usize,

        /// Cells of the row.
        cells: &'a [String],
    },

    /// Single cell of a [`DataTable`] row.
    TableCellValue {
        /// Index of the cell in its row.
        column: usize,

        /// Cell content.
        value: &'a str,
    },

    /// [`DocString`] argument.
    DocString(&'a DocString),

    /// Free-form output.
    Puts(&'a [String]),

    /// Out-of-band attachment.
    Embed(&'a Embed),

    /// Failure of another listener, isolated from the walk.
    ListenerFailed(&'a ListenerFailure),

    /// Event of a node kind without an explicit variant.
    Custom(&'a Custom),
}

impl Event<'_> {
    /// Resolves the [`Name`] of this [`Event`].
    #[must_use]
    pub fn name(&self) -> Name {
        match self {
            Self::StepResult(_) => Name::STEP_RESULT,
            Self::StepName(_) => Name::STEP_NAME,
            Self::MultilineArg(_) => Name::MULTILINE_ARG,
            Self::Exception { .. } => Name::EXCEPTION,
            Self::Table(_) => Name::TABLE,
            Self::TableRow { .. } => Name::TABLE_ROW,
            Self::TableCellValue { .. } => Name::TABLE_CELL_VALUE,
            Self::DocString(_) => Name::DOC_STRING,
            Self::Puts(_) => Name::PUTS,
            Self::Embed(_) => Name::EMBED,
            Self::ListenerFailed(_) => Name::LISTENER_FAILED,
            Self::Custom(c) => c.name().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Location, StepMatch};

    use super::*;

    #[test]
    fn names_follow_variants() {
        let step = Step::new("Given ", StepMatch::undefined("a step"), Location::new("a.feature", 3));
        assert_eq!(Event::StepResult(&step).name(), Name::STEP_RESULT);
        assert_eq!(Event::StepName(&step).name(), Name::STEP_NAME);
        assert_eq!(Event::Puts(&[]).name(), Name::PUTS);
        assert_eq!(
            Event::TableCellValue { column: 0, value: "x" }.name(),
            Name::TABLE_CELL_VALUE,
        );

        let custom = Custom::new("visit_comment");
        assert_eq!(Event::Custom(&custom).name().as_str(), "comment");
    }
}
