//! File system utility functions
//!
//! Provides safe file operations with proper error handling.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Copy a file from source to destination, preserving metadata
    #[instrument(skip(self))]
    pub fn copy_file<P: AsRef<Path> + std::fmt::Debug, Q: AsRef<Path> + std::fmt::Debug>(
        &self,
        src: P,
        dst: Q,
    ) -> io::Result<u64> {
        let src = src.as_ref();
        let dst = dst.as_ref();

        debug!("Copying file: {} -> {}", src.display(), dst.display());

        // Create parent directories if they don't exist
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }

        let bytes_copied = fs::copy(src, dst)?;

        // Copy permissions
        let metadata = fs::metadata(src)?;
        fs::set_permissions(dst, metadata.permissions())?;

        debug!("Successfully copied {} bytes", bytes_copied);
        Ok(bytes_copied)
    }

    /// Move a file from source to destination
    #[instrument(skip(self))]
    pub fn move_file<P: AsRef<Path> + std::fmt::Debug, Q: AsRef<Path> + std::fmt::Debug>(
        &self,
        src: P,
        dst: Q,
    ) -> io::Result<()> {
        let src = src.as_ref();
        let dst = dst.as_ref();

        debug!("Moving file: {} -> {}", src.display(), dst.display());

        // Create parent directories if they don't exist
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }

        // Try to rename first (faster if on same filesystem)
        match fs::rename(src, dst) {
            Ok(()) => {
                debug!("File moved successfully via rename");
                Ok(())
            }
            Err(e) => {
                // If rename fails (e.g., across filesystems), copy and delete
                debug!("Rename failed ({}), trying copy + delete", e);
                self.copy_file(src, dst)?;
                fs::remove_file(src)?;
                debug!("File moved successfully via copy + delete");
                Ok(())
            }
        }
    }

    /// Create directories recursively
    #[instrument(skip(self))]
    pub fn create_dir_all<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)
    }

    /// Remove a directory and all its contents if it exists
    #[instrument(skip(self))]
    pub fn remove_dir_all_if_exists<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<bool> {
        let path = path.as_ref();

        match fs::remove_dir_all(path) {
            Ok(()) => {
                debug!("Removed directory: {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Directory does not exist: {}", path.display());
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Wipe a directory and recreate it empty
    #[instrument(skip(self))]
    pub fn empty_dir<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        self.remove_dir_all_if_exists(path)?;
        self.create_dir_all(path)
    }

    /// Recursively copy a directory tree
    #[instrument(skip(self))]
    pub fn copy_dir<P: AsRef<Path> + std::fmt::Debug, Q: AsRef<Path> + std::fmt::Debug>(
        &self,
        src: P,
        dst: Q,
    ) -> io::Result<usize> {
        self.copy_dir_filtered(src.as_ref(), dst.as_ref(), &|_| true)
    }

    /// Recursively copy a directory tree, skipping entries the filter rejects.
    ///
    /// The filter sees every entry's source path; rejecting a directory skips
    /// its whole subtree. Returns the number of files copied.
    pub fn copy_dir_filtered(
        &self,
        src: &Path,
        dst: &Path,
        filter: &dyn Fn(&Path) -> bool,
    ) -> io::Result<usize> {
        fs::create_dir_all(dst)?;

        let mut copied = 0;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            let entry_path = entry.path();
            if !filter(&entry_path) {
                debug!("Skipping filtered entry: {}", entry_path.display());
                continue;
            }

            let target = dst.join(entry.file_name());
            if entry.file_type()?.is_dir() {
                copied += self.copy_dir_filtered(&entry_path, &target, filter)?;
            } else {
                fs::copy(&entry_path, &target)?;
                copied += 1;
            }
        }

        Ok(copied)
    }

    /// Write content to a file, creating parent directories if needed
    #[instrument(skip(self, contents))]
    pub fn write_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();

        debug!("Writing file: {}", path.display());

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
        debug!("File written successfully");
        Ok(())
    }

    /// Read file contents as string
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
    ) -> io::Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        fs::read_to_string(path)
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
