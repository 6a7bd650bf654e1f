//! Transient toast notifications.
//!
//! A notification slides in from the right shortly after insertion, stays
//! for a kind-dependent time, slides out and is removed. The message is
//! always inserted as text.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::consts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// Parse a kind name; unknown names are `Info`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Font Awesome icon class.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-circle",
            Self::Warning => "fa-exclamation-triangle",
            Self::Info => "fa-info-circle",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(45deg, #64ffda, #536dfe)",
            Self::Error => "linear-gradient(45deg, #ff4081, #ff6b6b)",
            Self::Warning | Self::Info => "linear-gradient(45deg, #536dfe, #ff4081)",
        }
    }

    /// Time on screen before the exit slide starts.
    #[must_use]
    pub fn visible_ms(self) -> u32 {
        match self {
            Self::Error => consts::NOTIFICATION_ERROR_VISIBLE_MS,
            _ => consts::NOTIFICATION_VISIBLE_MS,
        }
    }

    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    /// Inline style for a freshly inserted (off-screen) notification.
    #[must_use]
    pub fn initial_style(self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; background: {}; color: #0c0c0c; \
             padding: 1rem 1.5rem; border-radius: 10px; display: flex; align-items: center; \
             gap: 0.5rem; z-index: 10000; font-weight: 600; \
             box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3); transform: translateX(100%); \
             transition: transform 0.3s ease; max-width: 300px; word-wrap: break-word;",
            self.background()
        )
    }
}

/// Milestones of one notification, in milliseconds after insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub enter_at: u32,
    pub exit_at: u32,
    pub remove_at: u32,
}

impl Timeline {
    #[must_use]
    pub fn for_kind(kind: NotificationKind) -> Self {
        let exit_at = kind.visible_ms();
        Self {
            enter_at: consts::NOTIFICATION_ENTER_DELAY_MS,
            exit_at,
            remove_at: exit_at + consts::NOTIFICATION_EXIT_MS,
        }
    }
}

/// Insert a notification into `<body>` and schedule its lifecycle.
#[cfg(feature = "hydrate")]
pub fn show(message: &str, kind: NotificationKind) {
    use crate::dom;

    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = dom::body() else {
        return;
    };
    let Some(toast) = dom::report(document.create_element("div"), "createElement") else {
        return;
    };
    toast.set_class_name(&kind.class_name());
    dom::set_attr(&toast, "style", &kind.initial_style());

    if let Some(icon) = dom::report(document.create_element("i"), "createElement") {
        icon.set_class_name(&format!("fas {}", kind.icon()));
        dom::report(toast.append_child(&icon), "appendChild");
    }
    if let Some(text) = dom::report(document.create_element("span"), "createElement") {
        text.set_text_content(Some(message));
        dom::report(toast.append_child(&text), "appendChild");
    }
    if dom::report(body.append_child(&toast), "appendChild").is_none() {
        return;
    }

    let timeline = Timeline::for_kind(kind);
    let entering = toast.clone();
    dom::after(timeline.enter_at, move || dom::set_style(&entering, "transform", "translateX(0)"));
    dom::after(timeline.exit_at, move || {
        dom::set_style(&toast, "transform", "translateX(100%)");
        dom::after(consts::NOTIFICATION_EXIT_MS, move || toast.remove());
    });
}
