use crate::planner::{Rename, RenamePlan};
use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the plan's mapping as a pretty-printed JSON object.
///
/// Keys keep plan order and non-ASCII names are written as-is. An empty plan
/// still produces a file (`{}`).
pub fn write_mapping(plan: &RenamePlan, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create mapping file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &plan.mapping())
        .with_context(|| format!("Failed to write mapping file {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write mapping file {}", path.display()))?;

    tracing::debug!(path = %path.display(), renames = plan.renames.len(), "wrote mapping");
    Ok(())
}

/// Read a mapping file back as an ordered list of renames.
pub fn read_mapping(path: &Path) -> Result<Vec<Rename>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mapping file {}", path.display()))?;
    parse_mapping(&content)
        .with_context(|| format!("Failed to parse mapping file {}", path.display()))
}

fn parse_mapping(content: &str) -> Result<Vec<Rename>> {
    let MappingFile(renames) = serde_json::from_str(content)?;
    Ok(renames)
}

/// A mapping object read in document order.
struct MappingFile(Vec<Rename>);

impl<'de> Deserialize<'de> for MappingFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = MappingFile;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object of original name to new name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut renames = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((from, to)) = access.next_entry::<String, String>()? {
                    renames.push(Rename::new(from, to));
                }
                Ok(MappingFile(renames))
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}
