use serde::{Deserialize, Serialize};

/// Toggle state for the profile screen. Held only while the screen is
/// mounted; nothing is saved.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSettings {
    pub dark_mode: bool,
    pub notifications_enabled: bool,
}

impl ProfileSettings {
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_enabled = !self.notifications_enabled;
    }

    /// Stub; there is no session to tear down.
    pub fn logout(&self) {
        tracing::info!("logout requested, session handling not implemented");
    }
}
