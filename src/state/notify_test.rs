use super::*;
use std::cell::Cell;
use std::rc::Rc;

/// Payload that records when it is dropped, standing in for a timer handle.
struct DropFlag(Rc<Cell<u32>>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

// =============================================================
// NotificationKind
// =============================================================

#[test]
fn kind_maps_to_class_icon_and_color() {
    assert_eq!(NotificationKind::Success.class_name(), "notification notification-success");
    assert_eq!(NotificationKind::Error.class_name(), "notification notification-error");
    assert_eq!(NotificationKind::Success.icon_class(), "fas fa-check-circle");
    assert_eq!(NotificationKind::Error.icon_class(), "fas fa-exclamation-circle");
    assert_eq!(NotificationKind::Success.background(), "#27ae60");
    assert_eq!(NotificationKind::Error.background(), "#e74c3c");
}

#[test]
fn style_switches_animation_on_exit() {
    let visible = notification_style(NotificationKind::Error, NotificationPhase::Visible);
    let exiting = notification_style(NotificationKind::Error, NotificationPhase::Exiting);
    assert!(visible.contains("animation: slideIn 0.3s ease;"));
    assert!(exiting.contains("animation: slideOut 0.3s ease;"));
    assert!(visible.contains("position: fixed;"));
    assert!(visible.contains("background: #e74c3c;"));
}

// =============================================================
// NotificationCenter
// =============================================================

#[test]
fn push_assigns_increasing_ids_and_keeps_order() {
    let mut center = NotificationCenter::new();
    let a = center.push("uno", NotificationKind::Error, ());
    let b = center.push("dos", NotificationKind::Success, ());
    assert!(b > a);
    let messages: Vec<_> = center.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["uno", "dos"]);
}

#[test]
fn push_with_sees_assigned_id() {
    let mut center = NotificationCenter::new();
    let id = center.push_with("hola", NotificationKind::Success, |id| id * 10);
    assert_eq!(center.remove(id), Some(id * 10));
}

#[test]
fn repeated_failures_stack_without_cap() {
    let mut center = NotificationCenter::new();
    for _ in 0..25 {
        center.push("error", NotificationKind::Error, ());
    }
    assert_eq!(center.len(), 25);
}

#[test]
fn begin_exit_only_transitions_visible_banners() {
    let mut center = NotificationCenter::new();
    let id = center.push("hola", NotificationKind::Success, ());
    assert!(center.begin_exit(id));
    assert_eq!(center.get(id).map(|n| n.phase), Some(NotificationPhase::Exiting));
    assert!(!center.begin_exit(id));
    assert!(!center.begin_exit(id + 100));
}

#[test]
fn remove_detaches_one_and_drops_nothing_else() {
    let drops = Rc::new(Cell::new(0));
    let mut center = NotificationCenter::new();
    let a = center.push("a", NotificationKind::Error, DropFlag(Rc::clone(&drops)));
    center.push("b", NotificationKind::Error, DropFlag(Rc::clone(&drops)));

    drop(center.remove(a));
    assert_eq!(drops.get(), 1);
    assert_eq!(center.len(), 1);
    assert!(center.remove(a).is_none());
}

#[test]
fn dismiss_all_releases_every_payload_immediately() {
    let drops = Rc::new(Cell::new(0));
    let mut center = NotificationCenter::new();
    let first = center.push("a", NotificationKind::Error, DropFlag(Rc::clone(&drops)));
    center.push("b", NotificationKind::Success, DropFlag(Rc::clone(&drops)));
    center.begin_exit(first);

    drop(center.dismiss_all());
    assert_eq!(drops.get(), 2);
    assert!(center.is_empty());
}

#[test]
fn expiry_after_dismiss_is_harmless() {
    let mut center = NotificationCenter::new();
    let id = center.push("a", NotificationKind::Error, ());
    drop(center.dismiss_all());
    assert!(!center.begin_exit(id));
    assert!(center.remove(id).is_none());
}
