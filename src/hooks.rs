//! Post-generation hook.
//! Initializes Go module metadata in the generated project. Failures are
//! reported as warnings and never abort generation.

use log::{debug, warn};
use std::path::Path;
use std::process::{Command, Stdio};

/// Result of the bootstrap sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Completed,
    InitFailed,
    TidyFailed,
}

/// Runs `go mod init <module>` followed by `go mod tidy` in the generated
/// project directory.
pub struct GoModBootstrap {
    program: String,
}

impl GoModBootstrap {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }

    pub fn run<P: AsRef<Path>>(&self, dest: P, module: &str) -> BootstrapOutcome {
        let dest = dest.as_ref();

        if let Err(reason) = self.run_step(dest, &["mod", "init", module]) {
            warn!("{} mod init failed: {reason}", self.program);
            return BootstrapOutcome::InitFailed;
        }

        if let Err(reason) = self.run_step(dest, &["mod", "tidy"]) {
            warn!("{} mod tidy failed: {reason}", self.program);
            return BootstrapOutcome::TidyFailed;
        }

        BootstrapOutcome::Completed
    }

    fn run_step(&self, dest: &Path, args: &[&str]) -> Result<(), String> {
        debug!("Running '{} {}' in {}", self.program, args.join(" "), dest.display());

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(dest)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| e.to_string())?;

        if !status.success() {
            return Err(format!("exited with {status}"));
        }
        Ok(())
    }
}

impl Default for GoModBootstrap {
    fn default() -> Self {
        GoModBootstrap::new("go")
    }
}
