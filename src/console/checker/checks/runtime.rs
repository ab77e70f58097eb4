//! Runtime version probes (`--version` subprocesses).
use tokio::process::Command;
use tokio::time::timeout;

use crate::console::checker::config::SUBPROCESS_TIMEOUT;
use crate::console::report::CheckReport;

/// Runs `<program> --version` and folds the outcome into a report.
///
/// The subprocess is bounded by [`SUBPROCESS_TIMEOUT`]; a timeout, a
/// missing binary or a non-zero exit all degrade to a `Fail` report.
pub async fn run_version_probe(program: &str, label: &str, hint: Option<&str>) -> CheckReport {
    tracing::debug!("running version probe: {program} --version");

    match version_output(program).await {
        Ok(version) => CheckReport::pass(format!("{label}: {version}")),
        Err(err) => {
            tracing::debug!("version probe for {program} failed: {err}");

            match hint {
                Some(hint) => CheckReport::fail(format!("{label} not found")).with_detail(hint),
                None => CheckReport::fail(format!("{label} not found")),
            }
        }
    }
}

async fn version_output(program: &str) -> Result<String, String> {
    let output = timeout(SUBPROCESS_TIMEOUT, Command::new(program).arg("--version").output())
        .await
        .map_err(|_| "command timeout".to_string())?
        .map_err(|err| err.to_string())?;

    if !output.status.success() {
        return Err(format!("exit status: {}", output.status));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

    // Some runtimes report their version on stderr.
    if stdout.is_empty() {
        Ok(String::from_utf8_lossy(&output.stderr).trim().to_string())
    } else {
        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::run_version_probe;
    use crate::console::report::Status;

    #[tokio::test]
    async fn it_should_fail_when_the_program_does_not_exist() {
        let report = run_version_probe("definitely-not-a-runtime", "Node.js", None).await;

        assert_eq!(report.status, Status::Fail);
        assert!(report.label.contains("Node.js not found"));
    }

    #[tokio::test]
    async fn it_should_attach_the_remediation_hint_on_failure() {
        let report =
            run_version_probe("definitely-not-a-runtime", "Node.js", Some("Install from https://nodejs.org")).await;

        assert_eq!(report.detail.as_deref(), Some("Install from https://nodejs.org"));
    }

    #[tokio::test]
    async fn it_should_pass_when_the_program_exits_successfully() {
        // `true` ignores its arguments and exits 0 on any Unix system.
        let report = run_version_probe("true", "True", None).await;

        assert_eq!(report.status, Status::Pass);
    }
}
