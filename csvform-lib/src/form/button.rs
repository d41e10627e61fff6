use csvform_proto::{PENDING_LABEL, SUCCESS_LABEL};

use crate::view::Tone;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPhase {
    Idle,
    Pending,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
    pub tone: Tone,
    pub phase: ButtonPhase,
}

impl SubmitButton {
    pub fn new(label: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            enabled: false,
            tone: Tone::Neutral,
            phase: ButtonPhase::Idle,
        }
    }

    pub fn to_pending(&mut self) {
        self.label = PENDING_LABEL.to_string();
        self.enabled = false;
        self.phase = ButtonPhase::Pending;
    }

    pub fn to_success(&mut self) {
        self.label = SUCCESS_LABEL.to_string();
        self.enabled = true;
        self.tone = Tone::Success;
        self.phase = ButtonPhase::Success;
    }

    /// Back to idle with the original label. The success tone is kept.
    pub fn to_idle(&mut self, label: impl ToString) {
        self.label = label.to_string();
        self.enabled = true;
        self.tone = Tone::Success;
        self.phase = ButtonPhase::Idle;
    }
}
