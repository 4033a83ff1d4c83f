//! Notification mounting, timed retirement and the Escape shortcut.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::mount::{UnmountHandle, mount_to};
use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyViewState, IntoAny};
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::components::notification::NotificationBanner;
use crate::config::Timings;
use crate::error::SiteError;
use crate::state::notify::{NOTIFICATION_CLASS, NotificationCenter, NotificationId, NotificationKind, NotificationPhase};
use crate::util::dom::{listen, query_all};

/// A mounted banner and the timers that retire it.
///
/// Dropping it cancels both timers and unmounts the view.
pub struct LiveNotification {
    view: Option<UnmountHandle<AnyViewState>>,
    phase: RwSignal<NotificationPhase>,
    _exit_timer: Timeout,
    _detach_timer: Timeout,
}

impl Drop for LiveNotification {
    fn drop(&mut self) {
        // Unmount first: the view reads `phase`.
        drop(self.view.take());
        self.phase.dispose();
    }
}

type SharedCenter = Rc<RefCell<NotificationCenter<LiveNotification>>>;

/// Shows banners on `<body>`; cheap to clone into event handlers.
#[derive(Clone)]
pub struct Notifier {
    center: SharedCenter,
    body: HtmlElement,
    display_ms: u32,
    exit_ms: u32,
}

impl Notifier {
    pub fn new(document: &Document, timings: &Timings) -> Result<Self, SiteError> {
        let body = document.body().ok_or(SiteError::NoBody)?;
        Ok(Self {
            center: Rc::new(RefCell::new(NotificationCenter::new())),
            body,
            display_ms: timings.notification_display_ms,
            exit_ms: timings.notification_exit_ms,
        })
    }

    /// Mount a banner and schedule its exit animation and detach.
    pub fn show(&self, message: &str, kind: NotificationKind) -> NotificationId {
        let display_ms = self.display_ms;
        let detach_ms = self.display_ms.saturating_add(self.exit_ms);
        let weak = Rc::downgrade(&self.center);
        let body = self.body.clone();
        let text = message.to_owned();

        let id = self.center.borrow_mut().push_with(message, kind, move |id| {
            let phase = RwSignal::new(NotificationPhase::Visible);
            let view = mount_to(body, move || {
                view! { <NotificationBanner message=text kind=kind phase=phase/> }.into_any()
            });

            let exit_center = weak.clone();
            let exit_timer = Timeout::new(display_ms, move || {
                let Some(center) = exit_center.upgrade() else {
                    return;
                };
                let started = center.borrow_mut().begin_exit(id);
                if started {
                    phase.set(NotificationPhase::Exiting);
                }
            });

            let detach_timer = Timeout::new(detach_ms, move || {
                let Some(center) = weak.upgrade() else {
                    return;
                };
                let removed = center.borrow_mut().remove(id);
                drop(removed);
            });

            LiveNotification { view: Some(view), phase, _exit_timer: exit_timer, _detach_timer: detach_timer }
        });
        log::debug!("notification {id} ({}) shown", kind.as_str());
        id
    }

    /// Remove every live banner now, cancelling their timers.
    pub fn dismiss_all(&self) -> usize {
        let removed = self.center.borrow_mut().dismiss_all();
        let count = removed.len();
        drop(removed);
        count
    }
}

/// Escape clears every notification, including any not mounted by `notifier`.
pub fn install_escape(document: &Document, notifier: Notifier) -> Result<(), SiteError> {
    let doc = document.clone();
    listen(document, "keydown", move |ev: KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        let dismissed = notifier.dismiss_all();
        match query_all(&doc, &format!(".{NOTIFICATION_CLASS}")) {
            Ok(stray) => stray.iter().for_each(web_sys::Element::remove),
            Err(err) => log::warn!("notification sweep failed: {err}"),
        }
        log::debug!("escape dismissed {dismissed} notification(s)");
    })
}
