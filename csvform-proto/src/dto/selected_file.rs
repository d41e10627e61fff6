use serde::{Deserialize, Serialize};

use crate::{CSV_EXTENSION, CSV_MIME_TYPE};

/// A file picked or dropped by the user, as reported by the host.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String, // empty when the host could not tell
}

impl SelectedFile {
    pub fn new(name: impl ToString, size_bytes: u64, mime_type: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            size_bytes,
            mime_type: mime_type.to_string(),
        }
    }

    /// Builds a file whose MIME type is derived from the name's extension.
    pub fn with_guessed_mime(name: impl ToString, size_bytes: u64) -> Self {
        let name = name.to_string();
        let mime_type = mime_guess::from_path(&name)
            .first()
            .map(|mime| mime.essence_str().to_owned())
            .unwrap_or_default();
        Self {
            name,
            size_bytes,
            mime_type,
        }
    }

    /// Extension match is case sensitive: `DATA.CSV` only passes on its MIME type.
    pub fn is_csv(&self) -> bool {
        self.name.ends_with(CSV_EXTENSION) || self.mime_type == CSV_MIME_TYPE
    }

    /// Size in KiB with two decimals, ties rounded up.
    pub fn size_kb(&self) -> String {
        let hundredths = (self.size_bytes as u128 * 100 + 512) / 1024;
        format!("{}.{:02}", hundredths / 100, hundredths % 100)
    }
}
