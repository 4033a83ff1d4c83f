//! Transient notifications.
//!
//! DESIGN
//! ======
//! `NotificationCenter` is the registry of live banners. Each entry owns a
//! payload (in the browser: the mounted view and its timer handles), so
//! removing an entry is what cancels its pending timers. Escape clears every
//! entry at once; natural expiry removes one. There is no cap and no queue.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Class shared by every banner; Escape removal targets it.
pub const NOTIFICATION_CLASS: &str = "notification";

/// Banner flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Full class attribute, e.g. `notification notification-error`.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("{NOTIFICATION_CLASS} {NOTIFICATION_CLASS}-{}", self.as_str())
    }

    /// Font Awesome icon classes.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#27ae60",
            Self::Error => "#e74c3c",
        }
    }
}

/// Lifecycle of a live banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationPhase {
    #[default]
    Visible,
    /// Exit animation running; detach follows.
    Exiting,
}

/// Inline style for a banner in `phase`.
#[must_use]
pub fn notification_style(kind: NotificationKind, phase: NotificationPhase) -> String {
    let animation = match phase {
        NotificationPhase::Visible => "slideIn 0.3s ease",
        NotificationPhase::Exiting => "slideOut 0.3s ease",
    };
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; border-radius: 10px; \
         background: {}; color: white; font-family: 'Poppins', sans-serif; font-size: 0.95rem; \
         display: flex; align-items: center; gap: 10px; box-shadow: 0 4px 20px rgba(0,0,0,0.2); \
         z-index: 10000; animation: {animation};",
        kind.background()
    )
}

pub type NotificationId = u64;

/// A live banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

struct Entry<T> {
    notification: Notification,
    payload: T,
}

/// Registry of live notifications in insertion order.
pub struct NotificationCenter<T> {
    entries: Vec<Entry<T>>,
    next_id: NotificationId,
}

impl<T> Default for NotificationCenter<T> {
    fn default() -> Self {
        Self { entries: Vec::new(), next_id: 1 }
    }
}

impl<T> NotificationCenter<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a banner whose payload is already built.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, payload: T) -> NotificationId {
        self.push_with(message, kind, |_| payload)
    }

    /// Add a banner, building its payload from the assigned id.
    pub fn push_with(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        make_payload: impl FnOnce(NotificationId) -> T,
    ) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;
        let notification = Notification { id, message: message.into(), kind, phase: NotificationPhase::Visible };
        let payload = make_payload(id);
        self.entries.push(Entry { notification, payload });
        id
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|e| e.notification.id == id).map(|e| &e.notification)
    }

    /// Move a banner into its exit phase. Returns `false` when it is gone or
    /// already exiting.
    pub fn begin_exit(&mut self, id: NotificationId) -> bool {
        match self.entries.iter_mut().find(|e| e.notification.id == id) {
            Some(entry) if entry.notification.phase == NotificationPhase::Visible => {
                entry.notification.phase = NotificationPhase::Exiting;
                true
            }
            _ => false,
        }
    }

    /// Detach one banner, handing back its payload.
    pub fn remove(&mut self, id: NotificationId) -> Option<T> {
        let index = self.entries.iter().position(|e| e.notification.id == id)?;
        Some(self.entries.remove(index).payload)
    }

    /// Detach every banner at once, oldest first.
    pub fn dismiss_all(&mut self) -> Vec<T> {
        self.entries.drain(..).map(|e| e.payload).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
