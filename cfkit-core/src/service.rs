//! File service collaborator.
//!
//! The generator never touches the file system directly. It writes through a
//! [`FileService`], which is either the local disk rooted at an output
//! directory or an in-memory store used for previews and tests.

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

/// Read/write access to the destination of generated files.
///
/// Paths are relative to the service's root.
pub trait FileService {
    /// Read a previously written file
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Write a file, replacing any existing content
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()>;
}

/// Writes files below a root directory on the local disk.
#[derive(Debug, Clone)]
pub struct DiskFileService {
    root: PathBuf,
}

impl DiskFileService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileService for DiskFileService {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(path))
    }

    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        write_file(&self.root.join(path), content)
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Keeps written files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileService {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryFileService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files written
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Get the content of a written file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl FileService for MemoryFileService {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} has not been written", path.display()),
            )
        })
    }

    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let mut service = DiskFileService::new(temp.path());

        service
            .write(Path::new(".bluemix/pipeline.yml"), "stages: []\n")
            .unwrap();

        let path = temp.path().join(".bluemix").join("pipeline.yml");
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "stages: []\n");
    }

    #[test]
    fn test_disk_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let mut service = DiskFileService::new(temp.path());

        service.write(Path::new("manifest.yml"), "first").unwrap();
        service.write(Path::new("manifest.yml"), "second").unwrap();

        assert_eq!(service.read(Path::new("manifest.yml")).unwrap(), "second");
    }

    #[test]
    fn test_disk_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let service = DiskFileService::new(temp.path());

        let err = service.read(Path::new(".cfignore")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_disk_write_fails_when_parent_is_a_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".bluemix"), "not a directory").unwrap();
        let mut service = DiskFileService::new(temp.path());

        let result = service.write(Path::new(".bluemix/toolchain.yml"), "name: x");
        assert!(result.is_err());
    }

    #[test]
    fn test_memory_service_round_trip() {
        let mut service = MemoryFileService::new();
        assert!(service.is_empty());

        service.write(Path::new("manifest.yml"), "applications:").unwrap();

        assert_eq!(service.len(), 1);
        assert_eq!(service.get("manifest.yml"), Some("applications:"));
        assert_eq!(
            service.read(Path::new("manifest.yml")).unwrap(),
            "applications:"
        );
        assert!(service.read(Path::new(".cfignore")).is_err());
    }
}
