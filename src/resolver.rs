//! @dose
//! purpose: Works out where templates are read from and where the documentation
//!     directory is written for one invocation.
//!
//! invariants:
//!     - The output directory is always <cwd>/documentation
//!     - Candidates are tried in order: beside the executable, then <cwd>/templates
//!     - Only path computation and existence checks happen here, nothing is created
//!
//! gotchas:
//!     - When the executable path is unknown only the working-directory candidate is searched

use crate::error::{MokujinError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the generated directory under the working directory
pub const OUTPUT_DIR_NAME: &str = "documentation";

/// Name of the directory holding the templates
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Which candidate the templates directory was found at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    /// `<executable dir>/templates`
    Executable,
    /// `<cwd>/templates`
    WorkingDirectory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplates {
    pub dir: PathBuf,
    pub source: TemplateSource,
}

/// Paths for a single `generate` run
#[derive(Debug, Clone)]
pub struct Resolution {
    pub output_dir: PathBuf,
    pub templates: ResolvedTemplates,
}

impl Resolution {
    /// Resolve against the process's working directory and executable.
    pub fn from_env() -> Result<Self> {
        let cwd = env::current_dir()
            .map_err(|e| MokujinError::io("cannot determine the working directory", e))?;

        let exe = match env::current_exe() {
            Ok(exe) => Some(exe),
            Err(e) => {
                debug!(error = %e, "executable path unavailable");
                None
            }
        };

        Self::resolve(exe.as_deref(), &cwd)
    }

    pub fn resolve(exe: Option<&Path>, cwd: &Path) -> Result<Self> {
        Ok(Self {
            output_dir: output_dir(cwd),
            templates: resolve_templates_dir(exe, cwd)?,
        })
    }
}

pub fn output_dir(cwd: &Path) -> PathBuf {
    cwd.join(OUTPUT_DIR_NAME)
}

/// Find the templates directory, preferring the one next to `exe`.
pub fn resolve_templates_dir(exe: Option<&Path>, cwd: &Path) -> Result<ResolvedTemplates> {
    let mut searched = Vec::with_capacity(2);

    if let Some(exe_dir) = exe.and_then(Path::parent) {
        let candidate = exe_dir.join(TEMPLATES_DIR_NAME);
        if candidate.is_dir() {
            return Ok(ResolvedTemplates {
                dir: candidate,
                source: TemplateSource::Executable,
            });
        }
        debug!(path = %candidate.display(), "no templates beside the executable");
        searched.push(candidate);
    }

    let candidate = cwd.join(TEMPLATES_DIR_NAME);
    if candidate.is_dir() {
        return Ok(ResolvedTemplates {
            dir: candidate,
            source: TemplateSource::WorkingDirectory,
        });
    }
    searched.push(candidate);

    Err(MokujinError::TemplatesNotFound { searched })
}
