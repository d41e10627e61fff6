//! Presentation boundary between the form controller and the host toolkit.
//!
//! The controller never reads anything back from the view: every call here is
//! a projection of state the controller owns.

use csvform_proto::{dto::SelectedFile, SlotId, INVALID_FILE_MESSAGE};

use crate::form::SubmitButton;

/// Semantic colour of a status line or of the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Error,
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DropZoneTone {
    #[default]
    Idle,
    Highlighted,
}

/// Tells the host whether its default handling of an event must be suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventDisposition {
    Default,
    PreventDefault,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

impl StatusLine {
    pub fn selected(file: &SelectedFile) -> Self {
        Self {
            text: format!("Selected: {} ({} KB)", file.name, file.size_kb()),
            tone: Tone::Neutral,
        }
    }

    pub fn rejected() -> Self {
        Self {
            text: INVALID_FILE_MESSAGE.to_string(),
            tone: Tone::Error,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub trait FormView: Send + Sync {
    fn render_status(&self, slot: SlotId, status: &StatusLine);

    /// Resets the slot's own file input so it no longer holds a rejected file.
    fn clear_input(&self, slot: SlotId);

    fn render_drop_zone(&self, slot: SlotId, tone: DropZoneTone);

    fn render_button(&self, button: &SubmitButton);

    /// Blocking notification, shown until the user dismisses it.
    fn alert(&self, message: &str);
}
