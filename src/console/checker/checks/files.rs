//! File-existence probes (existence only, no content inspection).
use std::path::Path;

use crate::console::checker::config::{FileGroup, FileProbe};
use crate::console::report::{CheckReport, Status};

/// Checks every file of a group, resolving paths as
/// `<base>/<group base dir>/<probe path>`.
pub fn run(base: &Path, group: &FileGroup) -> Vec<CheckReport> {
    group.files.iter().map(|probe| check_file(base, group.base_dir, probe)).collect()
}

fn check_file(base: &Path, base_dir: &str, probe: &FileProbe) -> CheckReport {
    let path = base.join(base_dir).join(probe.path);
    let label = format!("  {} ({})", probe.path, probe.label);

    if path.exists() {
        return CheckReport::pass(label);
    }

    match probe.when_missing {
        Status::Warn => {
            let detail = probe.hint.unwrap_or("Optional or missing");

            CheckReport::warn(label).with_detail(detail)
        }
        _ => CheckReport::fail(label).with_detail("NOT FOUND"),
    }
}
