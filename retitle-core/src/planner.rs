use crate::config::RESERVED_NAMES;
use crate::listing::ListedEntry;
use crate::normalize::normalize_title;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

const DATE_LEN: usize = 8;

/// A single planned rename inside the root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

impl Rename {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Reasons an entry was left out of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Target already exists, skipping: {target}")]
    TargetExists { entry: String, target: String },

    #[error("Target already planned for {planned_by}, skipping: {target}")]
    TargetPlanned {
        entry: String,
        target: String,
        planned_by: String,
    },

    #[error("No usable title in {entry}, skipping")]
    EmptyTitle { entry: String },
}

/// The ordered rename mapping for one directory plus the entries that had to
/// be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    pub renames: Vec<Rename>,
    pub errors: Vec<PlanError>,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }

    /// The mapping as a JSON-style object view, `from -> to`, in plan order.
    pub fn mapping(&self) -> MappingView<'_> {
        MappingView(&self.renames)
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Serializes a list of renames as a single object, preserving order.
#[derive(Debug, Clone, Copy)]
pub struct MappingView<'a>(&'a [Rename]);

impl<'a> MappingView<'a> {
    pub fn new(renames: &'a [Rename]) -> Self {
        Self(renames)
    }
}

impl Serialize for MappingView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for rename in self.0 {
            map.serialize_entry(&rename.from, &rename.to)?;
        }
        map.end()
    }
}

fn is_date_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// Split a leading `YYYYMMDD` stamp off a name.
///
/// Returns the date and the title that follows it, with the separating
/// hyphens, underscores and whitespace removed. The date is not validated as a
/// calendar date. Nothing after the eight digits means there is no title, and
/// the name is treated as undated.
pub fn split_date_prefix(raw: &str) -> Option<(&str, &str)> {
    let date = raw.get(..DATE_LEN)?;
    if !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let rest = &raw[DATE_LEN..];
    if rest.is_empty() {
        return None;
    }

    let title = rest.trim_start_matches(is_date_separator);
    if title.is_empty() {
        // Separator-only remainder: keep the last separator as the title so the
        // date still applies.
        let last = rest.char_indices().last().map_or(0, |(idx, _)| idx);
        return Some((date, &rest[last..]));
    }

    Some((date, title))
}

/// Compute the canonical name for a single directory entry.
///
/// - `"20230115-team offsite"` → `"20230115-Team_Offsite"`
/// - `"My-Great Idea!"` → `"My_Great_Idea"`
pub fn plan_name(raw: &str) -> String {
    match split_date_prefix(raw) {
        Some((date, title)) => format!("{}-{}", date, normalize_title(title)),
        None => normalize_title(raw),
    }
}

/// Build the rename plan for a sorted directory listing.
///
/// Only directories are renamed, and names in `excluded` are never touched.
/// A target that matches any entry of the original listing, or a target
/// already claimed by an earlier entry, is recorded as an error and left out.
pub fn plan_renames<S, F>(entries: &[S], is_directory: F, excluded: &[&str]) -> RenamePlan
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let existing: HashSet<&str> = entries.iter().map(|entry| entry.as_ref()).collect();
    let mut claimed: HashMap<String, String> = HashMap::new();
    let mut plan = RenamePlan::default();

    for entry in entries.iter().map(|entry| entry.as_ref()) {
        if excluded.iter().any(|name| *name == entry) {
            tracing::debug!(entry, "skipping reserved entry");
            continue;
        }
        if !is_directory(entry) {
            tracing::debug!(entry, "skipping non-directory");
            continue;
        }

        let new_name = plan_name(entry).trim().to_string();
        if new_name == entry {
            continue;
        }

        if new_name.is_empty() {
            tracing::warn!(entry, "name has no usable title");
            plan.errors.push(PlanError::EmptyTitle {
                entry: entry.to_string(),
            });
            continue;
        }

        if existing.contains(new_name.as_str()) {
            tracing::warn!(entry, new_name = %new_name, "target already exists");
            plan.errors.push(PlanError::TargetExists {
                entry: entry.to_string(),
                target: new_name,
            });
            continue;
        }

        if let Some(planned_by) = claimed.get(&new_name) {
            tracing::warn!(entry, new_name = %new_name, %planned_by, "target already planned");
            plan.errors.push(PlanError::TargetPlanned {
                entry: entry.to_string(),
                target: new_name,
                planned_by: planned_by.clone(),
            });
            continue;
        }

        claimed.insert(new_name.clone(), entry.to_string());
        plan.renames.push(Rename::new(entry, new_name));
    }

    plan
}

/// Plan renames for a listing produced by [`crate::listing::list_entries`],
/// excluding the fixed reserved names.
pub fn plan_listing(listing: &[ListedEntry]) -> RenamePlan {
    let dirs: HashSet<&str> = listing
        .iter()
        .filter(|entry| entry.is_dir)
        .map(|entry| entry.name.as_str())
        .collect();
    let names: Vec<&str> = listing.iter().map(|entry| entry.name.as_str()).collect();

    plan_renames(&names, |name| dirs.contains(name), RESERVED_NAMES)
}
