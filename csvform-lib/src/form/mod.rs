use std::sync::Arc;

use csvform_proto::{dto::SelectedFile, SlotId};
use tokio::sync::Mutex;

use crate::{submit::SubmitJob, view::EventDisposition, Settings};

pub use self::button::*;
pub use self::controller::*;
pub use self::slot::*;

mod button;
mod controller;
mod slot;

pub type MutexFormState = Arc<Mutex<FormState>>;

/// Host events the controller reacts to.
#[derive(Clone, Debug)]
pub enum FormEvent {
    Selected(SlotId, Option<SelectedFile>),
    DragOver(SlotId),
    DragLeave(SlotId),
    Drop(SlotId, Vec<SelectedFile>),
    Submit,
}

#[derive(Debug)]
pub enum Dispatched {
    Event(EventDisposition),
    Submit(SubmitJob),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub slots: [UploadSlot; 2],
    pub button: SubmitButton,
}

impl FormState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            slots: SlotId::ALL.map(UploadSlot::new),
            button: SubmitButton::new(&settings.submit_label),
        }
    }

    pub fn slot(&self, id: SlotId) -> &UploadSlot {
        &self.slots[id.index()]
    }

    pub fn slot_mut(&mut self, id: SlotId) -> &mut UploadSlot {
        &mut self.slots[id.index()]
    }

    pub fn both_selected(&self) -> bool {
        self.slots.iter().all(UploadSlot::is_selected)
    }
}
