// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use kakeibo::notify::{NotificationOptions, Notifier, Severity, DEFAULT_TIMEOUT};

#[test]
fn starts_hidden() {
    let n = Notifier::new();
    let s = n.snapshot();
    assert!(!s.visible);
    assert_eq!(s.severity, Severity::Info);
    assert_eq!(s.timeout, DEFAULT_TIMEOUT);
}

#[test]
fn show_fills_defaults() {
    let n = Notifier::new();
    n.show_notification(NotificationOptions::new("保存しました"));

    let s = n.snapshot();
    assert!(s.visible);
    assert_eq!(s.message, "保存しました");
    assert_eq!(s.severity, Severity::Info);
    assert_eq!(s.timeout, Duration::from_millis(3000));
}

#[test]
fn zero_timeout_falls_back_to_default() {
    let n = Notifier::new();
    n.show_notification(NotificationOptions::new("x").timeout(Duration::ZERO));
    assert_eq!(n.snapshot().timeout, DEFAULT_TIMEOUT);

    n.show_notification(NotificationOptions::new("y").timeout(Duration::from_millis(500)));
    assert_eq!(n.snapshot().timeout, Duration::from_millis(500));
}

#[test]
fn latest_notification_wins() {
    let n = Notifier::new();
    n.error("first");
    n.success("second");

    let s = n.snapshot();
    assert_eq!(s.message, "second");
    assert_eq!(s.severity, Severity::Success);
}

#[test]
fn helpers_set_severity() {
    let n = Notifier::new();
    n.success("ok");
    assert_eq!(n.snapshot().severity, Severity::Success);
    n.error("ng");
    assert_eq!(n.snapshot().severity, Severity::Error);
    n.warning("careful");
    assert_eq!(n.snapshot().severity, Severity::Warning);
    n.info("fyi");
    assert_eq!(n.snapshot().severity, Severity::Info);
}

#[test]
fn dismiss_hides_but_keeps_message() {
    let n = Notifier::new();
    n.warning("budget almost spent");
    n.dismiss();

    let s = n.snapshot();
    assert!(!s.visible);
    assert_eq!(s.message, "budget almost spent");
}

#[test]
fn instances_are_independent() {
    let a = Notifier::new();
    let b = Notifier::new();
    a.success("only a");
    assert!(a.snapshot().visible);
    assert!(!b.snapshot().visible);
}

#[test]
fn state_serializes_timeout_in_millis() {
    let n = Notifier::new();
    n.info("hi");
    let v = serde_json::to_value(n.snapshot()).unwrap();
    assert_eq!(v["timeout_ms"], 3000);
    assert_eq!(v["severity"], "info");
}
