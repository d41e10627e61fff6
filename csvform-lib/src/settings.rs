use std::time::Duration;

use csvform_proto::{DEFAULT_PENDING_DELAY_MS, DEFAULT_RESET_DELAY_MS, DEFAULT_SUBMIT_LABEL};

#[derive(Debug, Clone)]
pub struct Settings {
    /// Time spent in the pending state before the upload is reported successful.
    pub pending_delay: Duration,
    /// Time the success label stays up before the button is restored.
    pub reset_delay: Duration,
    pub submit_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pending_delay: Duration::from_millis(DEFAULT_PENDING_DELAY_MS),
            reset_delay: Duration::from_millis(DEFAULT_RESET_DELAY_MS),
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
        }
    }
}
