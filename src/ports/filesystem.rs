//! Filesystem port for writing generated notes.

use std::path::Path;

use super::PortError;

/// Provides the filesystem operations the output writer needs.
pub trait FileSystem: Send + Sync {
    /// Writes the given contents to a file, creating parent directories and
    /// overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;
}
