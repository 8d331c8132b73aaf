#![no_main]

use libfuzzer_sys::fuzz_target;
use retitle_core::{normalize_title, plan_name, plan_renames, RESERVED_NAMES};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let names: Vec<String> = input
        .lines()
        .take(20)
        .map(|s| s.chars().take(100).collect())
        .collect();

    for name in &names {
        let normalized = normalize_title(name);
        assert_eq!(normalize_title(&normalized), normalized);

        let _ = plan_name(name);
    }

    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    let plan = plan_renames(&sorted, |_| true, RESERVED_NAMES);

    for (idx, rename) in plan.renames.iter().enumerate() {
        assert_ne!(rename.from, rename.to);
        assert!(!sorted.contains(&rename.to));
        assert!(plan.renames[idx + 1..].iter().all(|other| other.to != rename.to));
    }
});
