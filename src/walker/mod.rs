// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Depth-first walk over a [`Scenario`] tree.

mod visitor;

use std::{fmt, sync::Arc};

use crate::{
    ast::{Accept as _, Exception, Invocation, MultilineArg, Scenario, Status, Step},
    broadcaster::{Broadcast, Broadcaster},
    config::Config,
    error::{ListenerFailure, Result},
    event::{Embed, Event},
    listener::Listeners,
    runtime::Runtime,
};

#[doc(inline)]
pub use self::visitor::{Visitor, Work};

/// Walker executing [`Scenario`]s and reporting them to [`Listeners`].
///
/// Every node is reported in document order, nested events fully resolving
/// before the remaining phases of the enclosing one.
///
/// ```rust
/// # use std::sync::Arc;
/// # use cucumber_walker::{
/// #     ast::{Location, Scenario, Step, StepMatch},
/// #     event::{Message, Name},
/// #     listener::{Handlers, Listeners},
/// #     runtime::NoHooks,
/// #     Config, TreeWalker,
/// # };
/// let listeners = Listeners::new().with(
///     Handlers::new().on(Message::after(Name::STEP_RESULT), |_| Ok(())),
/// );
/// let mut walker = TreeWalker::new(Arc::new(NoHooks), listeners, Config::default());
///
/// let mut scenario = Scenario::new(
///     "Eating",
///     vec![Step::new("Given ", StepMatch::undefined("5 cukes"), Location::new("a.feature", 3))],
/// );
/// walker.execute(&mut scenario, false).unwrap();
/// ```
pub struct TreeWalker<R: ?Sized = dyn Runtime> {
    runtime: Arc<R>,
    broadcaster: Broadcaster,
    config: Config,
}

impl<R: Runtime + ?Sized + 'static> TreeWalker<R> {
    /// Creates a new [`TreeWalker`] notifying the given [`Listeners`].
    #[must_use]
    pub fn new(runtime: Arc<R>, listeners: Listeners, config: Config) -> Self {
        Self {
            runtime,
            broadcaster: Broadcaster::new(listeners, config.listener_failures),
            config,
        }
    }

    /// Executes the given [`Scenario`] within its hooks, reporting every step.
    ///
    /// Steps of an already failed [`Scenario`] (or of any one in a dry run)
    /// are reported without being run.
    ///
    /// # Errors
    ///
    /// If a hook fails, or a listener fails while failures are propagated.
    pub fn execute(&mut self, scenario: &mut Scenario, skip_hooks: bool) -> Result<()> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("scenario", name = scenario.name());
        #[cfg(feature = "tracing")]
        let _guard = span.enter();

        let runtime = Arc::clone(&self.runtime);
        let dry_run = self.config.dry_run;
        runtime.with_hooks(scenario, skip_hooks, &mut |scenario| {
            if scenario.failed() || dry_run {
                #[cfg(feature = "tracing")]
                tracing::debug!(dry_run, "step invocations skipped");
                scenario.skip_invocation();
            }
            scenario.steps_mut().accept(self)
        })
    }

    /// [`Runtime`] of this [`TreeWalker`].
    #[must_use]
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// [`Config`] of this [`TreeWalker`].
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Notified [`Listeners`].
    #[must_use]
    pub const fn listeners(&self) -> &Listeners {
        self.broadcaster.listeners()
    }

    /// [`ListenerFailure`]s isolated during the walks so far.
    #[must_use]
    pub fn listener_failures(&self) -> &[ListenerFailure] {
        self.broadcaster.failures()
    }

    pub(crate) fn broadcaster_mut(&mut self) -> &mut Broadcaster {
        &mut self.broadcaster
    }
}

impl<R: ?Sized> fmt::Debug for TreeWalker<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeWalker")
            .field("broadcaster", &self.broadcaster)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<R: Runtime + ?Sized + 'static> Visitor for TreeWalker<R> {
    fn visit_step(&mut self, step: &mut Step) -> Result<()> {
        if step.invocation() == Invocation::Run {
            let runtime = Arc::clone(&self.runtime);
            runtime.invoke(step, self)?;
        }
        self.visit_step_result(step)
    }

    fn visit_step_result(&mut self, step: &Step) -> Result<()> {
        self.bracketed(Event::StepResult(step), |walker| {
            walker.visit_step_name(step)?;
            if let Some(arg) = step.multiline_arg() {
                walker.visit_multiline_arg(arg)?;
            }
            if let Some(exception) = step.exception() {
                walker.visit_exception(exception, step.status())?;
            }
            Ok(())
        })
    }

    fn visit_step_name(&mut self, step: &Step) -> Result<()> {
        self.bracketed(Event::StepName(step), |_| Ok(()))
    }

    fn visit_multiline_arg(&mut self, arg: &MultilineArg) -> Result<()> {
        self.bracketed(Event::MultilineArg(arg), |walker| arg.accept(walker))
    }

    fn visit_exception(
        &mut self,
        exception: &Exception,
        status: Status,
    ) -> Result<()> {
        self.bracketed(Event::Exception { exception, status }, |_| Ok(()))
    }

    fn broadcast(&mut self, event: Event<'_>, work: &mut Work<'_>) -> Result<()> {
        self.bracketed(event, |walker| work(walker))
    }

    fn notify(&mut self, event: Event<'_>) -> Result<()> {
        self.atomic(event)
    }

    fn puts(&mut self, messages: &[String]) -> Result<()> {
        self.atomic(Event::Puts(messages))
    }

    fn embed(&mut self, embed: &Embed) -> Result<()> {
        self.atomic(Event::Embed(embed))
    }
}
