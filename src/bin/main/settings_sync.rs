use log::warn;
use swiftread_core::settings::{SettingsStore, TrainerSettings};
use swiftread_term::storage::JsonSettingsStore;

use super::SETTINGS_SAVE_DEBOUNCE_MS;

/// Debounced settings persistence: in-session speed and chunk tweaks
/// land on disk once the user stops adjusting.
pub(super) struct SettingsSyncState {
    last_saved: TrainerSettings,
    pending: Option<(TrainerSettings, u64)>,
}

impl SettingsSyncState {
    pub(super) fn new(initial: TrainerSettings) -> Self {
        Self {
            last_saved: initial,
            pending: None,
        }
    }

    pub(super) fn track_current(&mut self, current: TrainerSettings, now_ms: u64) {
        if current == self.last_saved {
            return;
        }

        match self.pending.as_mut() {
            Some((pending, changed_at_ms)) => {
                if *pending != current {
                    *pending = current;
                    *changed_at_ms = now_ms;
                }
            }
            None => {
                self.pending = Some((current, now_ms));
            }
        }
    }

    pub(super) fn flush_if_due(&mut self, store: &mut JsonSettingsStore, now_ms: u64) {
        let Some((candidate, changed_at_ms)) = self.pending else {
            return;
        };

        if now_ms.saturating_sub(changed_at_ms) < SETTINGS_SAVE_DEBOUNCE_MS {
            return;
        }

        match store.save(&candidate) {
            Ok(()) => {
                self.last_saved = candidate;
                self.pending = None;
            }
            Err(err) => {
                // Keep the pending change and retry on a later poll.
                warn!("failed to persist settings ({err}); will retry");
                self.pending = Some((candidate, now_ms));
            }
        }
    }
}
