use csvform_proto::dto::SelectedFile;
use linked_hash_map::LinkedHashMap;

/// Ordered key/value payload assembled on submit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormData {
    pub entries: LinkedHashMap<String, SelectedFile>,
}

impl FormData {
    pub fn append(&mut self, key: impl ToString, file: SelectedFile) {
        self.entries.insert(key.to_string(), file);
    }

    pub fn get(&self, key: &str) -> Option<&SelectedFile> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SelectedFile)> {
        self.entries.iter()
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.entries.values().map(|file| file.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use csvform_proto::dto::SelectedFile;

    use super::FormData;

    #[test]
    fn test_keeps_insertion_order() {
        let mut form_data = FormData::default();
        form_data.append("file2", SelectedFile::new("b.csv", 2, "text/csv"));
        form_data.append("file1", SelectedFile::new("a.csv", 1, "text/csv"));

        let keys: Vec<&String> = form_data.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["file2", "file1"]);
        assert_eq!(form_data.file_names(), vec!["b.csv", "a.csv"]);
        assert_eq!(form_data.get("file1").map(|f| f.size_bytes), Some(1));
        assert_eq!(form_data.len(), 2);
    }
}
