use crate::config::RunOptions;
use crate::listing::list_entries;
use crate::mapping::write_mapping;
use crate::output::PlanResult;
use crate::planner::{plan_listing, RenamePlan};
use anyhow::{bail, Result};

/// Plan operation - lists the root, plans every rename and writes the audit
/// mapping, returning both the plan and its structured result.
///
/// The mapping file is written in dry-run mode too, and when the plan is
/// empty.
pub fn plan_operation(options: &RunOptions) -> Result<(RenamePlan, PlanResult)> {
    let root = options.root();
    if !root.is_dir() {
        bail!("Root path is not a directory: {}", root.display());
    }

    let listing = list_entries(root)?;
    let plan = plan_listing(&listing);
    tracing::debug!(
        entries = listing.len(),
        renames = plan.renames.len(),
        errors = plan.errors.len(),
        "planned renames"
    );

    let mapping_path = options.mapping_path();
    write_mapping(&plan, &mapping_path)?;

    let result = PlanResult {
        root: root.display().to_string(),
        mapping_file: mapping_path.display().to_string(),
        dry_run: options.is_dry_run(),
        renames: plan.renames.clone(),
        errors: plan.error_messages(),
    };

    Ok((plan, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAPPING_FILE_NAME;
    use crate::planner::Rename;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_plan_operation_writes_mapping() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("20230115-team offsite")).unwrap();
        fs::create_dir(temp_dir.path().join("random_folder")).unwrap();
        fs::write(temp_dir.path().join("NOTES.txt"), "notes").unwrap();

        let options = RunOptions::new(temp_dir.path());
        let (plan, result) = plan_operation(&options).unwrap();

        assert_eq!(
            plan.renames,
            vec![
                Rename::new("20230115-team offsite", "20230115-Team_Offsite"),
                Rename::new("random_folder", "Random_Folder"),
            ]
        );
        assert!(result.dry_run);
        assert!(result.is_success());
        assert!(temp_dir.path().join(MAPPING_FILE_NAME).exists());
        // Dry run leaves the directories alone
        assert!(temp_dir.path().join("random_folder").is_dir());
    }

    #[test]
    fn test_plan_operation_rejects_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let options = RunOptions::new(temp_dir.path().join("missing"));

        let err = plan_operation(&options).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_plan_operation_second_run_sees_mapping_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("talks")).unwrap();
        let options = RunOptions::new(temp_dir.path());

        plan_operation(&options).unwrap();
        let (plan, _) = plan_operation(&options).unwrap();

        // The audit file is a plain file and is never renamed
        assert_eq!(plan.renames, vec![Rename::new("talks", "Talks")]);
    }
}
