#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod listing;
pub mod mapping;
pub mod mover;
pub mod normalize;
pub mod operations;
pub mod output;
pub mod planner;
pub mod preview;

pub use apply::{apply_renames, ApplyFailure, ApplyReport};
pub use config::{RunOptions, MAPPING_FILE_NAME, RESERVED_NAMES};
pub use listing::{list_entries, ListedEntry};
pub use mapping::{read_mapping, write_mapping};
pub use mover::{GitMover, MoveError, Mover};
pub use normalize::{case_token, classify, normalize_title, tokenize, CharClass};
pub use operations::{apply_operation, plan_operation};
pub use output::{ApplyResult, OutputFormat, OutputFormatter, PlanResult};
pub use planner::{
    plan_listing, plan_name, plan_renames, split_date_prefix, MappingView, PlanError, Rename,
    RenamePlan,
};
pub use preview::{Preview, SummaryStyle};
