use std::path::Path;

use csvform_proto::dto::SelectedFile;

use crate::Result;

/// Describes a file on disk the way a browser file input would.
pub fn selected_file(path: impl AsRef<Path>) -> Result<SelectedFile> {
    let path = path.as_ref();
    let size = std::fs::metadata(path)?.len();
    let name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.to_string(),
        None => {
            log::warn!("file name of {:?} is not valid utf-8", path);
            path.to_string_lossy().to_string()
        }
    };
    Ok(SelectedFile::with_guessed_mime(name, size))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::selected_file;
    use crate::Error;

    #[test]
    fn test_selected_file_from_path() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let file = selected_file(&path).unwrap();
        assert_eq!(file.name, "Cargo.toml");
        assert_eq!(file.size_bytes, std::fs::metadata(&path).unwrap().len());
        assert!(!file.is_csv());
    }

    #[test]
    fn test_missing_file() {
        let result = selected_file("does/not/exist.csv");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
