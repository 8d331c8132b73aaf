use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use walkdir::WalkDir;

/// One immediate child of the root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedEntry {
    pub name: String,
    pub is_dir: bool,
}

impl ListedEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// List the immediate children of `root`, sorted by name.
///
/// `is_dir` follows symlinks, so a link to a directory counts as a directory.
/// Names that are not valid UTF-8 cannot be normalized and are left out.
pub fn list_entries(root: &Path) -> Result<Vec<ListedEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to read directory {}", root.display()))?;

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 entry name");
            continue;
        };

        entries.push(ListedEntry::new(name, entry.path().is_dir()));
    }

    // sort_by_file_name compares OsStr; keep the string order explicit
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_entries_sorted_with_kinds() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("b folder")).unwrap();
        fs::create_dir(temp_dir.path().join("A folder")).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();

        let entries = list_entries(temp_dir.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                ListedEntry::new("A folder", true),
                ListedEntry::new("b folder", true),
                ListedEntry::new("notes.txt", false),
            ]
        );
    }

    #[test]
    fn test_list_entries_does_not_recurse() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("outer").join("inner")).unwrap();

        let entries = list_entries(temp_dir.path()).unwrap();
        assert_eq!(entries, vec![ListedEntry::new("outer", true)]);
    }

    #[test]
    fn test_list_entries_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_entries(temp_dir.path()).unwrap().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_list_entries_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(OsStr::from_bytes(b"bad\xff"))).unwrap();
        fs::create_dir(temp_dir.path().join("good")).unwrap();

        let entries = list_entries(temp_dir.path()).unwrap();
        assert_eq!(entries, vec![ListedEntry::new("good", true)]);
    }

    #[test]
    fn test_list_entries_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        assert!(list_entries(&missing).is_err());
    }
}
