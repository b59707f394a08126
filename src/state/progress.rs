/// Persisted "current level" store
use crate::config::types::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the session keeps its current level.
///
/// No bounds checking happens here; the session controller owns the range.
pub trait ProgressStore {
    fn get(&self) -> u32;
    fn set(&mut self, level: u32) -> Result<()>;
}

/// Single decimal integer in a plain file
#[derive(Debug, Clone)]
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for FileProgressStore {
    /// Absent, unreadable or malformed content all read as level 0
    fn get(&self) -> u32 {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Cannot read {}: {}; starting at level 0", self.path.display(), e);
                }
                return 0;
            }
        };
        match content.trim().parse::<u32>() {
            Ok(level) => level,
            Err(_) => {
                log::warn!(
                    "Ignoring malformed progress {:?} in {}",
                    content.trim(),
                    self.path.display()
                );
                0
            }
        }
    }

    fn set(&mut self, level: u32) -> Result<()> {
        atomic_write(&self.path, level.to_string().as_bytes())?;
        log::debug!("Progress {} -> {}", self.path.display(), level);
        Ok(())
    }
}

/// In-process store for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryProgressStore {
    level: u32,
    writes: usize,
}

impl MemoryProgressStore {
    pub fn new(level: u32) -> Self {
        Self { level, writes: 0 }
    }

    /// Number of `set` calls observed
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ProgressStore for MemoryProgressStore {
    fn get(&self) -> u32 {
        self.level
    }

    fn set(&mut self, level: u32) -> Result<()> {
        self.level = level;
        self.writes += 1;
        Ok(())
    }
}

/// Write to a sibling temp file, fsync, then rename over the target.
pub(crate) fn atomic_write(target: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = target
        .parent()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "no parent dir"))?;

    let temp_path = parent.join(format!(
        ".{}.tmp.{}",
        target.file_name().unwrap_or_default().to_string_lossy(),
        std::process::id()
    ));

    {
        let mut f = fs::File::create(&temp_path)?;
        f.write_all(content)?;
        f.sync_all()?;
    }

    if let Err(e) = fs::rename(&temp_path, target) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path().join(".py_level"));
        assert_eq!(store.get(), 0);
    }

    #[test]
    fn test_round_trip_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".py_level");

        let mut store = FileProgressStore::new(&path);
        store.set(17).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "17");

        let reloaded = FileProgressStore::new(&path);
        assert_eq!(reloaded.get(), 17);
    }

    #[test]
    fn test_malformed_content_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".py_level");
        for junk in ["abc", "-3", "", "4.5", "12 13"] {
            fs::write(&path, junk).unwrap();
            assert_eq!(FileProgressStore::new(&path).get(), 0, "content {junk:?}");
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".py_level");
        fs::write(&path, "  9\n").unwrap();
        assert_eq!(FileProgressStore::new(&path).get(), 9);
    }

    #[test]
    fn test_set_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileProgressStore::new(dir.path().join(".py_level"));
        store.set(1).unwrap();
        store.set(2).unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(".py_level")]);
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryProgressStore::new(3);
        assert_eq!(store.get(), 3);
        store.set(4).unwrap();
        assert_eq!(store.get(), 4);
        assert_eq!(store.writes(), 1);
    }
}
