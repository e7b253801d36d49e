#![allow(missing_docs)]

use std::rc::Rc;

use counter::script::{Step, parse_script, run_step};
use counter::{App, INCREMENT, INCREMENT_AND_LOG, LOG, MEMOIZED_LOG, displayed_count};
use snapshot::prelude::*;
use snapshot::{Error, Phase};

fn mounted() -> (Runtime<App>, MemorySink) {
    let sink = MemorySink::new();
    let mut runtime = Runtime::new(App, Rc::new(sink.clone()));
    runtime.mount();
    (runtime, sink)
}

fn count(runtime: &Runtime<App>) -> i32 {
    displayed_count(runtime.html().unwrap()).unwrap()
}

/// Fails every write the way a missing host element does
struct DetachedSink;

impl Sink for DetachedSink {
    fn write(&self, _text: &str) -> snapshot::Result<()> {
        Err(Error::MissingElement {
            id: "otherRoot".to_owned(),
        })
    }
}

#[test]
fn initial_render_matches_markup() {
    let (runtime, sink) = mounted();

    assert_eq!(
        runtime.html().unwrap().to_string(),
        "<div class=\"App\">\
         <div style=\"display: inline-block; margin-right: 5px\">Count is: 0</div>\
         <button style=\"margin-right: 5px\">Increment</button>\
         <button>Log</button>\
         <button>Log (memoized)</button>\
         <button>Increment and log</button>\
         </div>"
    );
    assert_eq!(sink.last(), None);
    assert_eq!(runtime.phase(), Phase::Idle);
}

#[test]
fn walkthrough_scenario() {
    let (mut runtime, sink) = mounted();
    assert_eq!(count(&runtime), 0);

    runtime.click(INCREMENT).unwrap();
    assert_eq!(count(&runtime), 1);

    runtime.click(INCREMENT).unwrap();
    assert_eq!(count(&runtime), 2);

    runtime.click(LOG).unwrap();
    assert_eq!(sink.last().as_deref(), Some("Count from React: 2"));

    runtime.click(MEMOIZED_LOG).unwrap();
    assert_eq!(sink.last().as_deref(), Some("Count from React: 0"));
}

#[test]
fn display_tracks_every_increment() {
    for n in 0..12 {
        let (mut runtime, _) = mounted();
        for _ in 0..n {
            runtime.click(INCREMENT).unwrap();
        }
        assert_eq!(count(&runtime), n);
    }
}

#[test]
fn immediate_log_reports_current_count() {
    for n in [0, 1, 3, 7] {
        let (mut runtime, sink) = mounted();
        for _ in 0..n {
            runtime.click(INCREMENT).unwrap();
        }
        runtime.click(LOG).unwrap();
        assert_eq!(sink.last(), Some(format!("Count from React: {n}")));
    }
}

#[test]
fn memoized_log_stays_at_first_render() {
    for n in [1, 2, 5, 20] {
        let (mut runtime, sink) = mounted();
        for _ in 0..n {
            runtime.click(INCREMENT).unwrap();
        }
        runtime.click(MEMOIZED_LOG).unwrap();
        assert_eq!(sink.last().as_deref(), Some("Count from React: 0"));
        assert_eq!(count(&runtime), n);
    }
}

#[test]
fn queued_increments_all_apply() {
    let (mut runtime, _) = mounted();

    runtime.dispatch(INCREMENT).unwrap();
    runtime.dispatch(INCREMENT).unwrap();

    // Nothing is visible before the commit
    assert_eq!(count(&runtime), 0);
    assert_eq!(runtime.phase(), Phase::UpdatePending);
    assert_eq!(runtime.pending_updates(), 2);

    assert_eq!(runtime.settle().unwrap(), 2);
    assert_eq!(count(&runtime), 2);
    assert_eq!(runtime.render_count(), 2);
}

#[test]
fn increment_and_log_reports_pre_commit_value() {
    let (mut runtime, sink) = mounted();
    runtime.click(INCREMENT).unwrap();
    runtime.click(INCREMENT).unwrap();

    runtime.click(INCREMENT_AND_LOG).unwrap();

    assert_eq!(sink.last().as_deref(), Some("Count from React: 2"));
    assert_eq!(count(&runtime), 3);
}

#[test]
fn memoized_callback_keeps_identity_across_renders() {
    let (mut runtime, _) = mounted();
    let memo_before = runtime.html().unwrap().find_control(MEMOIZED_LOG).unwrap();
    let log_before = runtime.html().unwrap().find_control(LOG).unwrap();

    runtime.click(INCREMENT).unwrap();

    let memo_after = runtime.html().unwrap().find_control(MEMOIZED_LOG).unwrap();
    let log_after = runtime.html().unwrap().find_control(LOG).unwrap();

    assert!(memo_before.ptr_eq(&memo_after));
    assert_eq!(memo_before.id(), memo_after.id());
    assert!(!log_before.ptr_eq(&log_after));
}

#[test]
fn log_clicks_do_not_queue_updates() {
    let (mut runtime, sink) = mounted();

    assert_eq!(runtime.click(LOG).unwrap(), 0);
    assert_eq!(runtime.click(MEMOIZED_LOG).unwrap(), 0);
    assert_eq!(runtime.render_count(), 1);
    assert_eq!(sink.writes().len(), 2);
}

#[test]
fn missing_output_element_surfaces_to_caller() {
    let mut runtime = Runtime::new(App, Rc::new(DetachedSink));
    runtime.mount();

    let expected = Err(Error::MissingElement {
        id: "otherRoot".to_owned(),
    });
    assert_eq!(runtime.click(LOG), expected);
    assert_eq!(runtime.click(MEMOIZED_LOG), expected);

    // Increment never touches the sink
    assert_eq!(runtime.click(INCREMENT), Ok(1));
    assert_eq!(count(&runtime), 1);
}

#[test]
fn failed_log_still_commits_queued_increment() {
    let mut runtime = Runtime::new(App, Rc::new(DetachedSink));
    runtime.mount();

    assert_eq!(
        runtime.click(INCREMENT_AND_LOG),
        Err(Error::MissingElement {
            id: "otherRoot".to_owned(),
        })
    );
    assert_eq!(runtime.phase(), Phase::Idle);
    assert_eq!(runtime.pending_updates(), 0);
    assert_eq!(count(&runtime), 1);
}

#[test]
fn scripted_run_matches_clicks() {
    let (mut runtime, sink) = mounted();
    let steps = parse_script("inc,inc,log,memo-log,dispatch:Increment,settle,inc-log").unwrap();
    assert_eq!(steps[4], Step::Dispatch("Increment".to_owned()));

    for step in &steps {
        run_step(&mut runtime, step).unwrap();
    }

    assert_eq!(
        sink.writes(),
        vec![
            "Count from React: 2".to_owned(),
            "Count from React: 0".to_owned(),
            "Count from React: 3".to_owned(),
        ]
    );
    assert_eq!(count(&runtime), 4);
}
