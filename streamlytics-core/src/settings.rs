//! Process-wide UI preferences shared by every chart.

use std::sync::Arc;

use streamlytics_model::Theme;
use tokio::sync::watch;
use tracing::debug;

/// Theme store backed by a watch channel.
///
/// Clones share the same channel, so a theme change made through any handle
/// is seen by every subscriber.
#[derive(Clone, Debug)]
pub struct UiSettings {
    sender: Arc<watch::Sender<Theme>>,
    receiver: watch::Receiver<Theme>,
}

impl UiSettings {
    pub fn new(theme: Theme) -> Self {
        let (sender, receiver) = watch::channel(theme);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        *self.receiver.borrow()
    }

    pub fn set_theme(&self, theme: Theme) {
        debug!(%theme, "theme changed");
        self.sender.send_replace(theme);
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle(&self) -> Theme {
        let mut next = Theme::default();
        self.sender.send_modify(|theme| {
            *theme = theme.toggled();
            next = *theme;
        });
        debug!(theme = %next, "theme toggled");
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.receiver.clone()
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
