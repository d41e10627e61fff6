pub const CSV_EXTENSION: &'static str = ".csv";
pub const CSV_MIME_TYPE: &'static str = "text/csv";

pub const INVALID_FILE_MESSAGE: &'static str = "Please select a CSV file only";
pub const MISSING_FILES_MESSAGE: &'static str = "Please select both files";

pub const DEFAULT_SUBMIT_LABEL: &'static str = "Upload Files";
pub const PENDING_LABEL: &'static str = "Uploading…";
pub const SUCCESS_LABEL: &'static str = "Upload Successful!";

pub const DEFAULT_PENDING_DELAY_MS: u64 = 1500;
pub const DEFAULT_RESET_DELAY_MS: u64 = 2000;
