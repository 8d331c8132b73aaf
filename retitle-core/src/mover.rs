use std::io;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

/// Failure of a single move, carrying the tool's own diagnostic.
#[derive(Debug, Error)]
pub enum MoveError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Performs one rename of a root child. Implementations run moves one at a
/// time, in the order they are called.
pub trait Mover {
    /// Short name used in failure messages, e.g. `git mv`.
    fn label(&self) -> &str;

    fn move_entry(&mut self, from: &str, to: &str) -> Result<(), MoveError>;
}

const GIT: &str = "git";

/// Moves entries with `git mv`, running inside the root directory.
#[derive(Debug, Clone)]
pub struct GitMover {
    root: PathBuf,
}

impl GitMover {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Mover for GitMover {
    fn label(&self) -> &str {
        "git mv"
    }

    fn move_entry(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        let output = Command::new(GIT)
            .args(["mv", "--", from, to])
            .current_dir(&self.root)
            .output()
            .map_err(|source| MoveError::Spawn {
                program: GIT.to_string(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        Err(MoveError::Failed {
            program: self.label().to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
