use csvform_proto::{dto::SelectedFile, SlotId};

#[derive(Clone, Debug, PartialEq)]
pub struct UploadSlot {
    pub id: SlotId,
    pub file: Option<SelectedFile>,
}

impl UploadSlot {
    pub fn new(id: SlotId) -> Self {
        Self { id, file: None }
    }

    pub fn is_selected(&self) -> bool {
        self.file.is_some()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(|file| file.name.as_str())
    }
}
