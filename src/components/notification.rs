//! Notification banner.

use leptos::prelude::*;

use crate::state::notify::{NotificationKind, NotificationPhase, notification_style};

/// Fixed-position banner with an icon matching `kind`. The slide animation
/// follows `phase`.
#[component]
pub fn NotificationBanner(
    message: String,
    kind: NotificationKind,
    #[prop(into)] phase: Signal<NotificationPhase>,
) -> impl IntoView {
    view! {
        <div class=kind.class_name() style=move || notification_style(kind, phase.get()) role="status">
            <i class=kind.icon_class()></i>
            <span>{message}</span>
        </div>
    }
}
