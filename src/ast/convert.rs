// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversions of parsed [`gherkin`] nodes into walkable ones.

use std::sync::Arc;

use super::{
    DataTable, DocString, Location, MultilineArg, Scenario, Step, StepMatch,
};

/// Path used for features parsed from a string.
const UNKNOWN_PATH: &str = "<unknown>";

fn feature_path(feature: &gherkin::Feature) -> Arc<str> {
    feature
        .path
        .as_ref()
        .map_or_else(|| UNKNOWN_PATH.into(), |p| p.display().to_string().into())
}

fn width(step: &gherkin::Step) -> usize {
    step.keyword.chars().count() + step.value.chars().count()
}

impl Step {
    /// Converts a [`gherkin::Step`] of the file at `path`.
    ///
    /// The step is left unmatched, so a [`Runtime`] should set its
    /// [`StepMatch`] once it finds the step definition.
    ///
    /// [`Runtime`]: crate::Runtime
    #[must_use]
    pub fn from_gherkin(step: &gherkin::Step, path: impl Into<Arc<str>>) -> Self {
        let location = Location::new(path, step.position.line)
            .with_column(step.position.col);
        let converted =
            Self::new(&*step.keyword, StepMatch::undefined(&*step.value), location);
        match MultilineArg::from_gherkin(step) {
            Some(arg) => converted.with_multiline_arg(arg),
            None => converted,
        }
    }
}

impl Scenario {
    /// Converts a [`gherkin::Scenario`] of the given [`gherkin::Feature`].
    ///
    /// `Background` steps of the [`gherkin::Feature`] go first, and every
    /// [`Step`] gets a source indent aligning the locations formatters print
    /// after it.
    #[must_use]
    pub fn from_gherkin(
        feature: &gherkin::Feature,
        scenario: &gherkin::Scenario,
    ) -> Self {
        let path = feature_path(feature);
        let background = feature
            .background
            .as_ref()
            .map(|b| b.steps.as_slice())
            .unwrap_or_default();

        let max_width = background
            .iter()
            .chain(&scenario.steps)
            .map(width)
            .max()
            .unwrap_or_default();

        let steps = background
            .iter()
            .map(|s| (s, true))
            .chain(scenario.steps.iter().map(|s| (s, false)))
            .map(|(s, in_background)| {
                let step = Step::from_gherkin(s, Arc::clone(&path))
                    .with_source_indent(max_width - width(s));
                if in_background {
                    step.in_background()
                } else {
                    step
                }
            })
            .collect::<Vec<_>>();

        Self::new(&*scenario.name, steps)
            .with_location(Location::new(path, scenario.position.line))
    }
}

impl MultilineArg {
    /// Converts the multiline argument of a [`gherkin::Step`], if any.
    #[must_use]
    pub fn from_gherkin(step: &gherkin::Step) -> Option<Self> {
        step.table
            .as_ref()
            .map(|t| DataTable::new(t.rows.clone()).into())
            .or_else(|| {
                step.docstring
                    .as_ref()
                    .map(|d| DocString::new(d.as_str()).into())
            })
    }
}
