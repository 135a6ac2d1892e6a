//! Fixed artifact names and platform defaults
//!
//! The companion import tool looks for these exact filenames inside the
//! export directory, so they are constants rather than configuration.

/// Filename of the PHPCR repository export inside the export directory.
pub const FILENAME_PHPCR: &str = "export.phpcr.xml";

/// Filename of the SQL dump inside the export directory.
pub const FILENAME_SQL: &str = "export.sql";

/// Filename of the uploads archive inside the export directory.
pub const FILENAME_UPLOADS: &str = "uploads.tar";

/// Default media path relative to the project root, used when the uploads
/// directory is not configured.
pub const DEFAULT_MEDIA_PATH: &str = "var/uploads";

/// Root path inside the content repository that gets exported.
pub const REPOSITORY_ROOT_PATH: &str = "/cmf";

/// Default timeout for the uploads archive stage, in seconds. The repository
/// and database stages carry no timeout.
pub const DEFAULT_UPLOADS_TIMEOUT_SECS: u64 = 300;
