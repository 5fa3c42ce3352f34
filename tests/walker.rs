use std::{
    cell::{Cell, RefCell},
    mem,
    rc::Rc,
    sync::Arc,
};

use cucumber_walker::{
    ast::{
        Accept, DataTable, DocString, Exception, Location, Scenario, Status,
        Step, StepMatch,
    },
    error::{HookError, ListenerError},
    event::{Custom, Embed, Event, Message},
    listener::{self, Handlers},
    runtime::{Body, NoHooks},
    Config, Listener, ListenerFailures, Listeners, Result, Runtime, TreeWalker,
    Visitor,
};

#[derive(Clone, Default)]
struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
    fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    fn take(&self) -> Vec<String> {
        mem::take(&mut *self.0.borrow_mut())
    }
}

/// Records every message as is.
struct Recorder(Log);

impl Listener for Recorder {
    fn on_event(&mut self, message: &Message, _: &Event<'_>) -> listener::Result {
        self.0.push(message.to_string());
        Ok(())
    }
}

/// Implements only the `step_result` handlers.
struct StepResults(Log);

impl Listener for StepResults {
    fn before_step_result(&mut self, step: &Step) -> listener::Result {
        self.0.push(format!("A:before_step_result {}", step.status()));
        Ok(())
    }

    fn after_step_result(&mut self, step: &Step) -> listener::Result {
        self.0.push(format!("A:after_step_result {}", step.status()));
        Ok(())
    }
}

/// Implements only the `puts` handler.
struct Printer(Log);

impl Listener for Printer {
    fn puts(&mut self, messages: &[String]) -> listener::Result {
        self.0.push(format!("B:puts {}", messages.join(" ")));
        Ok(())
    }
}

/// Runtime passing steps containing `pass`, failing ones containing `fail`,
/// and skipping every step after a failed one.
#[derive(Default)]
struct Scripted {
    log: Log,
    failed: Cell<bool>,
    failing_before_hook: bool,
    failing_after_hook: bool,
}

impl Runtime for Scripted {
    fn with_hooks(
        &self,
        scenario: &mut Scenario,
        skip_hooks: bool,
        body: &mut Body<'_>,
    ) -> Result<()> {
        if skip_hooks {
            return body(scenario);
        }

        self.log.push("hook:before");
        if self.failing_before_hook {
            scenario.mark_failed();
        }
        let res = body(scenario);
        self.log.push("hook:after");

        res?;
        if self.failing_after_hook {
            return Err(HookError::after("no teardown").into());
        }
        Ok(())
    }

    fn invoke(&self, step: &mut Step, visitor: &mut dyn Visitor) -> Result<()> {
        let text = step.step_match().text().to_owned();
        self.log.push(format!("invoke:{text}"));
        if self.failed.get() {
            step.set_status(Status::Skipped);
            return Ok(());
        }
        if text.contains("print") {
            visitor.puts(&[format!("from {text}")])?;
        }
        if text.contains("fail") {
            self.failed.set(true);
            step.fail(Exception::new(format!("{text} failed")));
        } else {
            step.set_status(Status::Passed);
        }
        Ok(())
    }
}

fn step(text: &str, line: usize) -> Step {
    Step::new(
        "Given ",
        StepMatch::undefined(text),
        Location::new("features/cukes.feature", line),
    )
}

fn walker<R: Runtime + 'static>(
    runtime: R,
    listeners: Listeners,
    config: Config,
) -> TreeWalker<R> {
    TreeWalker::new(Arc::new(runtime), listeners, config)
}

#[test]
fn reports_nested_events_in_document_order() {
    let log = Log::default();
    let mut walker = walker(
        NoHooks,
        Listeners::new().with(Recorder(log.clone())),
        Config::default(),
    );
    let mut scenario = Scenario::new(
        "Eating",
        vec![step("I eat these", 3)
            .with_multiline_arg(DataTable::from(vec![vec!["count"], vec!["3"]]))
            .failed_with(Exception::new("too many"))],
    );

    walker.execute(&mut scenario, false).expect("no failure");

    assert_eq!(
        log.take(),
        [
            "before_step_result",
            "before_step_name",
            "after_step_name",
            "before_multiline_arg",
            "before_table",
            "before_table_row",
            "table_cell_value",
            "after_table_row",
            "before_table_row",
            "table_cell_value",
            "after_table_row",
            "after_table",
            "after_multiline_arg",
            "before_exception",
            "after_exception",
            "after_step_result",
        ],
    );
}

#[test]
fn typed_handlers_see_only_their_events() {
    let log = Log::default();
    let mut walker = walker(
        NoHooks,
        Listeners::new()
            .with(StepResults(log.clone()))
            .with(Printer(log.clone())),
        Config::default(),
    );

    walker.puts(&["hello".to_owned()]).expect("no failure");
    assert_eq!(log.take(), ["B:puts hello"]);

    let passed = step("I have 5 cukes", 2).with_status(Status::Passed);
    walker.visit_step_result(&passed).expect("no failure");
    assert_eq!(
        log.take(),
        ["A:before_step_result passed", "A:after_step_result passed"],
    );
}

#[test]
fn runs_steps_and_reports_their_output() {
    let log = Log::default();
    let runtime = Scripted {
        log: log.clone(),
        ..Scripted::default()
    };
    let listeners = Listeners::new()
        .with(StepResults(log.clone()))
        .with(Printer(log.clone()));
    let mut walker = walker(runtime, listeners, Config::default());
    let mut scenario = Scenario::new(
        "Eating",
        vec![
            step("I pass and print", 2),
            step("I fail", 3),
            step("I pass", 4),
        ],
    );

    walker.execute(&mut scenario, false).expect("no failure");

    assert_eq!(
        log.take(),
        [
            "hook:before",
            "invoke:I pass and print",
            "B:puts from I pass and print",
            "A:before_step_result passed",
            "A:after_step_result passed",
            "invoke:I fail",
            "A:before_step_result failed",
            "A:after_step_result failed",
            "invoke:I pass",
            "A:before_step_result skipped",
            "A:after_step_result skipped",
            "hook:after",
        ],
    );
    assert!(scenario.failed());
    assert_eq!(
        scenario.steps()[1].exception().map(Exception::message),
        Some("I fail failed"),
    );
}

#[test]
fn failed_scenario_is_reported_without_invocations() {
    let log = Log::default();
    let runtime = Scripted {
        log: log.clone(),
        failing_before_hook: true,
        ..Scripted::default()
    };
    let mut walker = walker(
        runtime,
        Listeners::new().with(StepResults(log.clone())),
        Config::default(),
    );
    let mut scenario =
        Scenario::new("Eating", vec![step("I pass", 2), step("I pass", 3)]);

    walker.execute(&mut scenario, false).expect("no failure");

    assert_eq!(
        log.take(),
        [
            "hook:before",
            "A:before_step_result skipped",
            "A:after_step_result skipped",
            "A:before_step_result skipped",
            "A:after_step_result skipped",
            "hook:after",
        ],
    );
}

#[test]
fn dry_run_skips_invocations() {
    let log = Log::default();
    let runtime = Scripted {
        log: log.clone(),
        ..Scripted::default()
    };
    let config = Config {
        dry_run: true,
        ..Config::default()
    };
    let mut walker =
        walker(runtime, Listeners::new().with(StepResults(log.clone())), config);
    let mut scenario = Scenario::new("Eating", vec![step("I pass", 2)]);

    walker.execute(&mut scenario, true).expect("no failure");

    assert_eq!(
        log.take(),
        ["A:before_step_result skipped", "A:after_step_result skipped"],
    );
    assert!(walker.config().dry_run);
}

#[test]
fn hook_failure_reaches_the_caller() {
    let log = Log::default();
    let runtime = Scripted {
        log: log.clone(),
        failing_after_hook: true,
        ..Scripted::default()
    };
    let mut walker = walker(
        runtime,
        Listeners::new().with(StepResults(log.clone())),
        Config::default(),
    );
    let mut scenario = Scenario::new("Eating", vec![step("I pass", 2)]);

    let err = walker
        .execute(&mut scenario, false)
        .expect_err("after hook failed");

    assert!(err.is_hook_error());
    assert_eq!(err.to_string(), "After hook failed: no teardown");
    assert_eq!(log.take().last().map(String::as_str), Some("hook:after"));
}

#[test]
fn isolated_listener_failures_do_not_stop_the_walk() {
    let log = Log::default();
    let listeners = Listeners::new()
        .with(Handlers::new().on(
            "before_step_name".parse().expect("valid message"),
            |_| Err(ListenerError::custom("terminal closed")),
        ))
        .with(StepResults(log.clone()));
    let mut walker = walker(NoHooks, listeners, Config::default());
    let mut scenario =
        Scenario::new("Eating", vec![step("one", 2), step("two", 3)]);

    walker.execute(&mut scenario, false).expect("isolated");

    assert_eq!(log.take().len(), 4);
    assert_eq!(walker.listener_failures().len(), 2);
    assert_eq!(walker.listeners().len(), 2);
}

#[test]
fn propagated_listener_failure_aborts_the_walk() {
    let log = Log::default();
    let listeners = Listeners::new()
        .with(Handlers::new().on(
            "before_step_name".parse().expect("valid message"),
            |_| Err(ListenerError::custom("terminal closed")),
        ))
        .with(StepResults(log.clone()));
    let config = Config {
        listener_failures: ListenerFailures::Propagate,
        ..Config::default()
    };
    let mut walker = walker(NoHooks, listeners, config);
    let mut scenario =
        Scenario::new("Eating", vec![step("one", 2), step("two", 3)]);

    let err = walker.execute(&mut scenario, false).expect_err("propagated");

    assert!(err.is_listener_failure());
    assert_eq!(
        err.to_string(),
        "Listener #0 failed on `before_step_name`: terminal closed",
    );
    assert_eq!(
        log.take(),
        ["A:before_step_result skipped", "A:after_step_result skipped"],
    );
    assert!(walker.listener_failures().is_empty());
}

/// Node kind the walker has no method for.
struct Comment(&'static str);

impl Accept for Comment {
    fn accept(&self, visitor: &mut dyn Visitor) -> Result<()> {
        let custom = Custom::new("visit_comment").arg(self.0);
        visitor.broadcast(Event::Custom(&custom), &mut |visitor| {
            visitor.notify(Event::DocString(&DocString::new(self.0)))
        })
    }
}

#[test]
fn forwards_custom_events() {
    let log = Log::default();
    let seen = Log::default();
    let sink = seen.clone();

    struct Comments(Log);

    impl Listener for Comments {
        fn custom(&mut self, message: &Message, custom: &Custom) -> listener::Result {
            let text = custom.arg_as::<&str>(0).copied().unwrap_or_default();
            self.0.push(format!("{message} {text}"));
            Ok(())
        }
    }

    let mut walker = walker(
        NoHooks,
        Listeners::new()
            .with(Recorder(log.clone()))
            .with(Comments(sink)),
        Config::default(),
    );

    Comment("# TODO: more cukes").accept(&mut walker).expect("no failure");

    assert_eq!(
        log.take(),
        ["before_comment", "doc_string", "after_comment"],
    );
    assert_eq!(
        seen.take(),
        [
            "before_comment # TODO: more cukes",
            "after_comment # TODO: more cukes",
        ],
    );
}

#[test]
fn embeds_are_atomic() {
    let log = Log::default();
    let mut walker = walker(
        NoHooks,
        Listeners::new().with(Recorder(log.clone())),
        Config::default(),
    );

    walker
        .embed(&Embed::guessed("target/shot.png", "Screenshot"))
        .expect("no failure");
    walker
        .visit_multiline_arg(&DocString::new("{}").with_content_type("json").into())
        .expect("no failure");

    assert_eq!(
        log.take(),
        ["embed", "before_multiline_arg", "doc_string", "after_multiline_arg"],
    );
}
