use crate::mover::{MoveError, Mover};
use crate::planner::{Rename, RenamePlan};
use std::fmt;

/// A move that failed, tied to the exact pair that was attempted.
#[derive(Debug)]
pub struct ApplyFailure {
    pub rename: Rename,
    pub label: String,
    pub error: MoveError,
}

impl fmt::Display for ApplyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed for {} -> {}: {}",
            self.label, self.rename.from, self.rename.to, self.error
        )
    }
}

/// Outcome of running every move in a plan.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub applied: Vec<Rename>,
    pub failures: Vec<ApplyFailure>,
}

impl ApplyReport {
    pub fn failure_messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }
}

/// Run every planned move in order.
///
/// A failed move is recorded and the batch moves on to the next entry; moves
/// are never retried and successful ones are never rolled back.
pub fn apply_renames(plan: &RenamePlan, mover: &mut dyn Mover) -> ApplyReport {
    let mut report = ApplyReport::default();

    for rename in &plan.renames {
        match mover.move_entry(&rename.from, &rename.to) {
            Ok(()) => {
                tracing::info!(from = %rename.from, to = %rename.to, "renamed");
                report.applied.push(rename.clone());
            },
            Err(error) => {
                tracing::warn!(from = %rename.from, to = %rename.to, %error, "move failed");
                report.failures.push(ApplyFailure {
                    rename: rename.clone(),
                    label: mover.label().to_string(),
                    error,
                });
            },
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls and fails for the names it was told to reject.
    struct FakeMover {
        calls: Vec<(String, String)>,
        fail_on: Vec<&'static str>,
    }

    impl Mover for FakeMover {
        fn label(&self) -> &str {
            "fake mv"
        }

        fn move_entry(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
            self.calls.push((from.to_string(), to.to_string()));
            if self.fail_on.iter().any(|name| *name == from) {
                return Err(MoveError::Failed {
                    program: "fake mv".to_string(),
                    status: "exit status: 1".to_string(),
                    stderr: "destination exists".to_string(),
                });
            }
            Ok(())
        }
    }

    fn plan(pairs: &[(&str, &str)]) -> RenamePlan {
        RenamePlan {
            renames: pairs.iter().map(|(from, to)| Rename::new(*from, *to)).collect(),
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_apply_all_succeed_in_order() {
        let mut mover = FakeMover {
            calls: Vec::new(),
            fail_on: Vec::new(),
        };
        let plan = plan(&[("b talk", "B_Talk"), ("a talk", "A_Talk")]);

        let report = apply_renames(&plan, &mut mover);

        assert!(report.failures.is_empty());
        assert_eq!(report.applied, plan.renames);
        assert_eq!(
            mover.calls,
            vec![
                ("b talk".to_string(), "B_Talk".to_string()),
                ("a talk".to_string(), "A_Talk".to_string()),
            ]
        );
    }

    #[test]
    fn test_apply_continues_after_failure() {
        let mut mover = FakeMover {
            calls: Vec::new(),
            fail_on: vec!["first"],
        };
        let plan = plan(&[("first", "First"), ("second", "Second")]);

        let report = apply_renames(&plan, &mut mover);

        assert!(!report.failures.is_empty());
        assert_eq!(mover.calls.len(), 2);
        assert_eq!(report.applied, vec![Rename::new("second", "Second")]);
        assert_eq!(
            report.failure_messages(),
            vec![
                "fake mv failed for first -> First: fake mv exited with exit status: 1: destination exists"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_apply_empty_plan() {
        let mut mover = FakeMover {
            calls: Vec::new(),
            fail_on: Vec::new(),
        };

        let report = apply_renames(&RenamePlan::default(), &mut mover);

        assert!(report.failures.is_empty());
        assert!(report.applied.is_empty());
        assert!(mover.calls.is_empty());
    }
}
