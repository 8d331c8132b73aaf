use std::path::{Path, PathBuf};

/// Entries that are never renamed, whatever their type.
pub const RESERVED_NAMES: &[&str] = &[".git", ".gitignore", ".git 2", ".DS_Store"];

/// File written into the root after planning, holding the `from -> to` mapping.
pub const MAPPING_FILE_NAME: &str = "rename_mapping_pascal.json";

/// Resolved settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Directory whose immediate children are renamed
    pub root: PathBuf,
    /// Perform the moves instead of only printing the plan
    pub apply: bool,
    /// Audit file name, relative to `root`
    pub mapping_file: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            apply: false,
            mapping_file: PathBuf::from(MAPPING_FILE_NAME),
        }
    }
}

impl RunOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_apply(mut self, apply: bool) -> Self {
        self.apply = apply;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        !self.apply
    }

    /// Full path of the audit file.
    pub fn mapping_path(&self) -> PathBuf {
        self.root.join(&self.mapping_file)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
