use std::cell::RefCell;
use std::rc::Rc;

use crate::report::{LogEntry, Reporter, Severity};

#[test]
fn severities_escalate_in_order() {
    assert!(Severity::Debug < Severity::Message);
    assert!(Severity::Message < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
    assert!(Severity::Error < Severity::Critical);
}

#[test]
fn severity_displays_lowercase() {
    assert_eq!(Severity::Debug.to_string(), "debug");
    assert_eq!(Severity::Critical.to_string(), "critical");
}

#[test]
fn entries_are_retained_in_log_order() {
    let reporter = Reporter::new();
    assert!(reporter.is_empty());

    reporter.debug("resolving node `add`");
    reporter.warning("implicit narrowing");
    reporter.error("no resolution for pin `rhs`");

    let entries = reporter.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].severity, Severity::Debug);
    assert_eq!(entries[1].severity, Severity::Warning);
    assert_eq!(entries[2].severity, Severity::Error);
    assert_eq!(entries[2].message, "no resolution for pin `rhs`");
    assert_eq!(reporter.len(), 3);
    assert!(!reporter.is_empty());
}

#[test]
fn error_threshold_and_worst() {
    let reporter = Reporter::new();
    assert!(!reporter.has_errors());
    assert_eq!(reporter.worst(), None);

    reporter.message("starting pass");
    reporter.warning("meta-array dimension unchecked");
    assert!(!reporter.has_errors());
    assert_eq!(reporter.worst(), Some(Severity::Warning));

    reporter.critical("type registry poisoned");
    assert!(reporter.has_errors());
    assert_eq!(reporter.worst(), Some(Severity::Critical));
}

#[test]
fn handlers_observe_entries_while_registered() {
    let reporter = Reporter::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    reporter.message("before registration");

    let sink = Rc::clone(&seen);
    let guard = reporter.add_handler(move |entry| {
        sink.borrow_mut().push(entry.message.clone());
    });
    reporter.warning("first");
    reporter.error("second");
    drop(guard);
    reporter.message("after drop");

    // No replay before, no delivery after; retention is unaffected.
    assert_eq!(*seen.borrow(), ["first", "second"]);
    assert_eq!(reporter.len(), 4);
}

#[test]
fn guards_unregister_explicitly_and_idempotently() {
    let reporter = Reporter::new();
    let count = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&count);
    let mut guard = reporter.add_handler(move |_| *sink.borrow_mut() += 1);
    assert!(guard.is_registered());

    reporter.message("one");
    guard.unregister();
    assert!(!guard.is_registered());
    guard.unregister();
    reporter.message("two");

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn handlers_dispatch_in_registration_order() {
    let reporter = Reporter::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&order);
    let _a = reporter.add_handler(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&order);
    let _b = reporter.add_handler(move |_| second.borrow_mut().push("second"));

    reporter.message("fan out");
    assert_eq!(*order.borrow(), ["first", "second"]);
}

#[test]
fn dropping_one_guard_keeps_the_others() {
    let reporter = Reporter::new();
    let hits = Rc::new(RefCell::new(Vec::new()));

    let a_sink = Rc::clone(&hits);
    let a = reporter.add_handler(move |_| a_sink.borrow_mut().push("a"));
    let b_sink = Rc::clone(&hits);
    let _b = reporter.add_handler(move |_| b_sink.borrow_mut().push("b"));

    reporter.message("both");
    drop(a);
    reporter.message("b only");

    assert_eq!(*hits.borrow(), ["a", "b", "b"]);
}

#[test]
fn entries_serialize_flat() {
    let entry = LogEntry {
        severity: Severity::Warning,
        message: "swizzle `xw` out of range".to_string(),
    };

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "severity": "warning",
            "message": "swizzle `xw` out of range",
        })
    );
}
