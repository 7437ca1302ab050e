//! Simulated build of an operator project.
//!
//! Only reports what would be built; no build system is invoked.

use crate::error::Result;

/// Inputs of the `build` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub target: String,
    pub clean: bool,
}

impl BuildRequest {
    /// Status lines printed for this request.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![
            "Starting build...".to_string(),
            format!("  Build target: {}", self.target),
        ];
        if self.clean {
            messages.push("  Cleaning before build.".to_string());
        }
        messages.push("Build finished (simulated).".to_string());
        messages
    }
}

pub fn run_build(request: &BuildRequest) -> Result<()> {
    log::debug!("Simulating build: {request:?}");
    for message in request.messages() {
        println!("{message}");
    }
    Ok(())
}
