use std::sync::Arc;

use csvform_proto::{dto::SelectedFile, SlotId, MISSING_FILES_MESSAGE};
use tokio::sync::Mutex;

use crate::{
    submit::{FormData, SubmitError, SubmitJob},
    view::{DropZoneTone, EventDisposition, FormView, StatusLine},
    Result, Settings,
};

use super::{Dispatched, FormEvent, FormState, MutexFormState};

/// Owns the two upload slots and the submit button, and projects both onto a
/// [`FormView`].
#[derive(Clone)]
pub struct UploadFormController {
    state: MutexFormState,
    view: Arc<dyn FormView>,
    settings: Arc<Settings>,
}

impl UploadFormController {
    pub fn new(view: Arc<dyn FormView>, settings: Settings) -> Self {
        let state = FormState::new(&settings);
        view.render_button(&state.button);
        Self {
            state: Arc::new(Mutex::new(state)),
            view,
            settings: Arc::new(settings),
        }
    }

    pub async fn state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    pub async fn dispatch(&self, event: FormEvent) -> Result<Dispatched> {
        let disposition = match event {
            FormEvent::Selected(slot, file) => {
                self.on_file_selected(slot, file).await;
                EventDisposition::Default
            }
            FormEvent::DragOver(slot) => self.on_drag_over(slot),
            FormEvent::DragLeave(slot) => self.on_drag_leave(slot),
            FormEvent::Drop(slot, files) => self.on_drop(slot, files).await,
            FormEvent::Submit => return Ok(Dispatched::Submit(self.submit().await?)),
        };
        Ok(Dispatched::Event(disposition))
    }

    pub async fn on_file_selected(&self, slot: SlotId, file: Option<SelectedFile>) {
        let mut state = self.state.lock().await;
        self.apply_selection(&mut state, slot, file);
    }

    pub fn on_drag_over(&self, slot: SlotId) -> EventDisposition {
        log::trace!("drag over {}", slot);
        self.view.render_drop_zone(slot, DropZoneTone::Highlighted);
        EventDisposition::PreventDefault
    }

    pub fn on_drag_leave(&self, slot: SlotId) -> EventDisposition {
        log::trace!("drag leave {}", slot);
        self.view.render_drop_zone(slot, DropZoneTone::Idle);
        EventDisposition::Default
    }

    /// Only the first dropped file is considered. A rejected drop writes the
    /// warning but leaves the slot's current selection in place.
    pub async fn on_drop(&self, slot: SlotId, files: Vec<SelectedFile>) -> EventDisposition {
        self.view.render_drop_zone(slot, DropZoneTone::Idle);

        if files.len() > 1 {
            log::debug!("{}: ignoring {} extra dropped files", slot, files.len() - 1);
        }
        let Some(file) = files.into_iter().next() else {
            return EventDisposition::PreventDefault;
        };

        if !file.is_csv() {
            log::debug!("{}: rejected dropped file {}", slot, file.name);
            self.view.render_status(slot, &StatusLine::rejected());
            return EventDisposition::PreventDefault;
        }

        let mut state = self.state.lock().await;
        self.apply_selection(&mut state, slot, Some(file));
        EventDisposition::PreventDefault
    }

    pub async fn refresh_submit_enablement(&self) -> bool {
        let mut state = self.state.lock().await;
        self.refresh(&mut state)
    }

    /// Starts the simulated upload. Fails with [`SubmitError::MissingFiles`]
    /// after alerting the user when either slot is empty.
    pub async fn submit(&self) -> Result<SubmitJob> {
        let mut state = self.state.lock().await;

        let (file1, file2) = match (
            state.slot(SlotId::File1).file.clone(),
            state.slot(SlotId::File2).file.clone(),
        ) {
            (Some(file1), Some(file2)) => (file1, file2),
            _ => {
                self.view.alert(MISSING_FILES_MESSAGE);
                return Err(SubmitError::MissingFiles.into());
            }
        };

        let mut form_data = FormData::default();
        form_data.append(SlotId::File1.key(), file1.clone());
        form_data.append(SlotId::File2.key(), file2.clone());

        state.button.to_pending();
        self.view.render_button(&state.button);

        let handle = {
            let state = self.state.clone();
            let view = self.view.clone();
            let settings = self.settings.clone();

            tokio::spawn(async move {
                tokio::time::sleep(settings.pending_delay).await;
                {
                    let mut state = state.lock().await;
                    state.button.to_success();
                    view.render_button(&state.button);
                }
                log::info!("{}: {}", SlotId::File1.label(), file1.name);
                log::info!("{}: {}", SlotId::File2.label(), file2.name);

                tokio::time::sleep(settings.reset_delay).await;
                let mut state = state.lock().await;
                state.button.to_idle(&settings.submit_label);
                view.render_button(&state.button);
            })
        };

        for (key, value) in form_data.iter() {
            log::info!("{} {:?}", key, value);
        }

        Ok(SubmitJob::new(form_data, handle))
    }

    /// Shared by the selection and drop paths so both leave identical state.
    fn apply_selection(&self, state: &mut FormState, slot: SlotId, file: Option<SelectedFile>) {
        match file {
            Some(file) if !file.is_csv() => {
                log::debug!("{}: rejected {} ({:?})", slot, file.name, file.mime_type);
                self.view.render_status(slot, &StatusLine::rejected());
                self.view.clear_input(slot);
                state.slot_mut(slot).file = None;
            }
            Some(file) => {
                log::debug!("{}: selected {}", slot, file.name);
                self.view.render_status(slot, &StatusLine::selected(&file));
                state.slot_mut(slot).file = Some(file);
            }
            None => {
                log::debug!("{}: cleared", slot);
                self.view.render_status(slot, &StatusLine::empty());
                state.slot_mut(slot).file = None;
            }
        }
        self.refresh(state);
    }

    fn refresh(&self, state: &mut FormState) -> bool {
        state.button.enabled = state.both_selected();
        self.view.render_button(&state.button);
        state.button.enabled
    }
}
