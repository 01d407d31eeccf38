//! Filesystem-backed file writer.

use std::path::Path;

use crate::infrastructure::ports::FileWriterPort;

/// Writes straight to disk, replacing any existing file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileWriter;

impl FsFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl FileWriterPort for FsFileWriter {
    fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        std::fs::write(path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_bytes_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.json");

        FsFileWriter::new()
            .write_file(&path, b"{}")
            .expect("write file");

        assert_eq!(std::fs::read(&path).expect("read back"), b"{}");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("out.json");

        let err = FsFileWriter::new()
            .write_file(&path, b"{}")
            .expect_err("parent directory does not exist");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
