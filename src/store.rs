//! Sheet persistence
//!
//! Imported sheets, with the charts configured over them, are saved through a
//! [`SheetStore`]. Two implementations are provided: an in-memory map and a
//! directory holding one JSON document per sheet.

use crate::data::{DataError, DataResult};
use crate::types::SheetFile;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Storage for imported sheets, keyed by sheet id
pub trait SheetStore: Send + Sync {
    /// Insert or replace a sheet
    fn save(&self, sheet: &SheetFile) -> DataResult<()>;

    fn load(&self, id: Uuid) -> DataResult<SheetFile>;

    /// Remove a sheet; removing an unknown id is [`DataError::NotFound`]
    fn delete(&self, id: Uuid) -> DataResult<()>;

    /// All stored sheets, oldest import first
    fn list(&self) -> DataResult<Vec<SheetFile>>;
}

fn sort_by_import_time(sheets: &mut [SheetFile]) {
    sheets.sort_by(|a, b| a.imported_at.cmp(&b.imported_at).then(a.id.cmp(&b.id)));
}

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Debug, Default)]
pub struct MemoryStore {
    sheets: RwLock<HashMap<Uuid, SheetFile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sheets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.read().is_empty()
    }
}

impl SheetStore for MemoryStore {
    fn save(&self, sheet: &SheetFile) -> DataResult<()> {
        self.sheets.write().insert(sheet.id, sheet.clone());
        Ok(())
    }

    fn load(&self, id: Uuid) -> DataResult<SheetFile> {
        self.sheets
            .read()
            .get(&id)
            .cloned()
            .ok_or(DataError::NotFound(id))
    }

    fn delete(&self, id: Uuid) -> DataResult<()> {
        self.sheets
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(DataError::NotFound(id))
    }

    fn list(&self) -> DataResult<Vec<SheetFile>> {
        let mut sheets: Vec<SheetFile> = self.sheets.read().values().cloned().collect();
        sort_by_import_time(&mut sheets);
        Ok(sheets)
    }
}

// ============================================================================
// JSON directory store
// ============================================================================

/// Stores each sheet as `<root>/<id>.json`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash never leaves a half-written sheet behind.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> DataResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    fn read_sheet(path: &Path) -> DataResult<SheetFile> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl SheetStore for JsonDirStore {
    fn save(&self, sheet: &SheetFile) -> DataResult<()> {
        let json = serde_json::to_string_pretty(sheet)?;

        let mut file = tempfile::NamedTempFile::new_in(&self.root)?;
        file.write_all(json.as_bytes())?;
        file.persist(self.path_for(sheet.id))
            .map_err(|e| DataError::Io(e.error))?;

        debug!(id = %sheet.id, title = %sheet.title, "Saved sheet");
        Ok(())
    }

    fn load(&self, id: Uuid) -> DataResult<SheetFile> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(DataError::NotFound(id));
        }
        Self::read_sheet(&path)
    }

    fn delete(&self, id: Uuid) -> DataResult<()> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(DataError::NotFound(id));
        }
        std::fs::remove_file(&path)?;
        debug!(id = %id, "Deleted sheet");
        Ok(())
    }

    /// Unreadable or malformed documents are skipped with a warning
    fn list(&self) -> DataResult<Vec<SheetFile>> {
        let mut sheets = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match Self::read_sheet(&path) {
                Ok(sheet) => sheets.push(sheet),
                Err(e) => warn!("Skipping unreadable sheet {:?}: {}", path, e),
            }
        }
        sort_by_import_time(&mut sheets);
        Ok(sheets)
    }
}
