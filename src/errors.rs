use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_internal_error!(WriteError, "Error writing shopping log to storage.");

// Config-related.
define_client_error!(InvalidConfig, "Invalid shopping log config (invalid RON format).");

// Form validation.
define_client_error!(
    InvalidFieldValue,
    "Invalid input for {field}: {reason}.",
    { field: &str, reason: &str }
);
define_client_error!(MissingItems, "Please complete all fields before saving. At least one item is required.");
define_client_error!(
    SaveTooSoon,
    "Save ignored: the previous save was {elapsed_ms} ms ago, please wait {interval_ms} ms between saves.",
    { elapsed_ms: i64, interval_ms: i64 }
);

// Storage.
define_client_error!(NoSavedLog, "No saved shopping log found.");
define_internal_error!(CorruptStoredLog, "Stored shopping log could not be read back.");

// Import.
define_client_error!(InvalidJson, "Invalid file uploaded: not valid JSON.");
define_client_error!(
    InvalidLogStructure,
    "Invalid shopping log structure: {details}.",
    { details: &str }
);
define_client_error!(
    InvalidItemStructure,
    "Invalid shopping item structure: {details}.",
    { details: &str }
);

// Document generation.
define_client_error!(
    DocumentToolUnavailable,
    "Document library not loaded. Document generation is unavailable."
);
define_client_error!(
    DocumentGenerationFailed,
    "Failed to generate {format} document. Please try again.",
    { format: &str }
);
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
