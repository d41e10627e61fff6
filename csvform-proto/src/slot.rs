use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two fixed file positions of the upload form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SlotId {
    File1,
    File2,
}

impl SlotId {
    pub const ALL: [SlotId; 2] = [SlotId::File1, SlotId::File2];

    /// Form key, also used as the payload entry key.
    pub fn key(&self) -> &'static str {
        match self {
            SlotId::File1 => "file1",
            SlotId::File2 => "file2",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SlotId::File1 => 0,
            SlotId::File2 => 1,
        }
    }

    pub fn status_key(&self) -> &'static str {
        match self {
            SlotId::File1 => "file1-info",
            SlotId::File2 => "file2-info",
        }
    }

    /// Human label used in diagnostics, e.g. `File 1`.
    pub fn label(&self) -> &'static str {
        match self {
            SlotId::File1 => "File 1",
            SlotId::File2 => "File 2",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::SlotId;

    #[test]
    pub fn test_slot_keys() {
        assert_eq!(SlotId::File2.to_string(), "file2");
        assert_eq!(SlotId::File1.status_key(), "file1-info");
        assert_eq!(SlotId::ALL.map(|slot| slot.index()), [0, 1]);
    }

    #[test]
    pub fn test_serde_json() {
        assert_eq!(r#""file1""#, serde_json::to_string(&SlotId::File1).unwrap());
        let slot: SlotId = serde_json::from_str(r#""file2""#).unwrap();
        assert_eq!(slot, SlotId::File2);
    }
}
