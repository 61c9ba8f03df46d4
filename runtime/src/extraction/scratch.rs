//! Per-request scratch files for staging document bytes on disk.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// A staged document. The file is removed when the value is dropped.
pub struct ScratchDocument {
    id: Uuid,
    file: NamedTempFile,
}

impl ScratchDocument {
    /// Write `bytes` to a uniquely named file inside `dir`.
    pub fn stage(dir: &Path, bytes: &[u8]) -> std::io::Result<Self> {
        let id = Uuid::new_v4();
        let mut file = tempfile::Builder::new()
            .prefix(&format!("docsum-{id}-"))
            .suffix(".pdf")
            .tempfile_in(dir)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { id, file })
    }

    /// Identifier embedded in the file name.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Location of the staged file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
