// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration of a [`TreeWalker`].
//!
//! [`TreeWalker`]: crate::TreeWalker

use std::str::FromStr;

use smart_default::SmartDefault;

/// Options of a [`TreeWalker`], passed once on its creation.
///
/// Derives [`clap::Args`], so it may be flattened into a host CLI:
///
/// ```rust
/// # use clap::Parser;
/// # use cucumber_walker::{Config, ListenerFailures};
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     walker: Config,
/// }
///
/// let cli = Cli::parse_from(["test", "--listener-failures", "propagate"]);
/// assert_eq!(cli.walker.listener_failures, ListenerFailures::Propagate);
/// ```
///
/// [`TreeWalker`]: crate::TreeWalker
#[derive(Clone, Copy, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Config {
    /// What to do when a listener fails to handle an event.
    #[arg(long, value_name = "isolate|propagate", default_value = "isolate")]
    #[default(ListenerFailures::Isolate)]
    pub listener_failures: ListenerFailures,

    /// Report steps without running them.
    #[arg(long)]
    pub dry_run: bool,
}

/// Possible policies of handling [`Listener`] failures.
///
/// [`Listener`]: crate::Listener
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListenerFailures {
    /// Recording the failure, reporting it to the other listeners and
    /// continuing the walk.
    Isolate,

    /// Aborting the walk with the first failure.
    Propagate,
}

impl FromStr for ListenerFailures {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "isolate" => Ok(Self::Isolate),
            "propagate" => Ok(Self::Propagate),
            _ => Err("possible options: isolate, propagate"),
        }
    }
}
