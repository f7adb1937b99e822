// Notification overlay model. Notifications stay fully opaque for a solid
// interval, then fade linearly to transparent and are dropped. The renderer
// reads `opacity()` each frame; this module owns only the timing.

pub const NOTIFICATION_SOLID_SECONDS: f32 = 2.0;
pub const NOTIFICATION_FADE_SECONDS: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    /// Extra style classes the renderer applies to the label.
    pub style_classes: Vec<String>,
    age: f32,
}

impl Notification {
    pub fn opacity(&self) -> f32 {
        opacity_at(self.age, NOTIFICATION_SOLID_SECONDS, NOTIFICATION_FADE_SECONDS)
    }

    pub fn is_expired(&self) -> bool {
        self.age >= NOTIFICATION_SOLID_SECONDS + NOTIFICATION_FADE_SECONDS
    }
}

/// 1.0 while `age < solid`, then a linear ramp down to 0.0 over `fade`.
pub fn opacity_at(age: f32, solid_seconds: f32, fade_seconds: f32) -> f32 {
    if age <= solid_seconds {
        return 1.0;
    }
    if fade_seconds <= 0.0 {
        return 0.0;
    }
    (1.0 - (age - solid_seconds) / fade_seconds).clamp(0.0, 1.0)
}

/// The overlay container. The original engine attached it to the visual
/// tree on first use; here the host owns one per UI document.
#[derive(Debug, Clone, Default)]
pub struct NotificationOverlay {
    notifications: Vec<Notification>,
}

impl NotificationOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_notification(&mut self, text: &str, style_classes: &[&str]) -> &Notification {
        self.notifications.push(Notification {
            text: text.to_string(),
            style_classes: style_classes.iter().map(|c| c.to_string()).collect(),
            age: 0.0,
        });
        self.notifications.last().unwrap()
    }

    /// Advance all notification ages and drop the fully faded ones.
    pub fn update(&mut self, dt: f32) {
        for notification in &mut self.notifications {
            notification.age += dt.max(0.0);
        }
        self.notifications.retain(|n| !n.is_expired());
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}
