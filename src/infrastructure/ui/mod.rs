//! UI interaction services (separate from domain logic)

use gloo_timers::callback::Timeout;

use crate::domain::logging::{LogComponent, get_logger};

/// How long a transient notification stays on screen.
const NOTIFICATION_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
        }
    }
}

/// Transient toast notifications appended to the `#notifications` container.
///
/// Purely additive DOM work - when the container is missing the message still
/// lands in the console log, so a degraded page never swallows errors.
#[derive(Debug, Clone, Default)]
pub struct NotificationService;

impl NotificationService {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        get_logger().info(LogComponent::Infrastructure("UI"), &format!("✅ {message}"));
        self.show(NotificationKind::Success, message);
    }

    pub fn error(&self, message: &str) {
        get_logger().error(LogComponent::Infrastructure("UI"), &format!("❌ {message}"));
        self.show(NotificationKind::Error, message);
    }

    fn show(&self, kind: NotificationKind, message: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let Some(container) = document.get_element_by_id("notifications") else {
            get_logger().warn(
                LogComponent::Infrastructure("UI"),
                "Notification container 'notifications' not found in DOM",
            );
            return;
        };

        if let Ok(toast) = document.create_element("div") {
            toast.set_class_name(kind.css_class());
            toast.set_text_content(Some(message));
            let _ = container.append_child(&toast);

            Timeout::new(NOTIFICATION_TTL_MS, move || {
                toast.remove();
            })
            .forget();
        }
    }
}
