use yew::Callback;

use crate::error::StorageError;
use crate::utils::scheduler::{Scheduler, TaskHandle};
use crate::utils::storage::KeyValueStore;

pub const CONSENT_KEY: &str = "wavilog_cookie_consent";

pub fn has_consented(store: &dyn KeyValueStore) -> bool {
    match store.get(CONSENT_KEY) {
        Ok(value) => value.map_or(false, |v| !v.is_empty()),
        Err(e) => {
            log::warn!("could not read consent flag: {}", e);
            false
        }
    }
}

pub fn record_consent(store: &dyn KeyValueStore) -> Result<(), StorageError> {
    store.set(CONSENT_KEY, "true")
}

/// Delayed consent prompt. Reads the flag once when mounted; if it is unset,
/// `on_show` fires after the delay. Dropping the prompt cancels the timer.
pub struct ConsentPrompt {
    _timer: Option<TaskHandle>,
}

impl ConsentPrompt {
    pub fn mount(
        store: &dyn KeyValueStore,
        scheduler: &dyn Scheduler,
        delay_ms: u32,
        on_show: Callback<()>,
    ) -> Self {
        if has_consented(store) {
            return Self { _timer: None };
        }
        let timer = scheduler.timeout(delay_ms, Box::new(move || on_show.emit(())));
        Self {
            _timer: Some(timer),
        }
    }

    #[cfg(test)]
    pub fn is_scheduled(&self) -> bool {
        self._timer.is_some()
    }
}
