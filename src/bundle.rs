//! @dose
//! purpose: Copies every top-level file of the templates directory into the
//!     documentation directory.
//!
//! when-editing:
//!     - !The output directory must exist before the first copy is attempted
//!     - Sub-directories are skipped, never recursed into
//!
//! invariants:
//!     - Entries are processed in file-name order
//!     - The first failing copy aborts the run; files copied before it stay on disk
//!     - OutputReady is always the first event, Copied fires once per successful copy
//!       before the next entry is tried
//!
//! do-not:
//!     - Never prompt or back up when a destination already exists, it is overwritten

use crate::copier::copy_file;
use crate::error::{MokujinError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// A template that was copied into the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedTemplate {
    pub name: String,
    pub bytes: u64,
}

/// Progress reported while copying
#[derive(Debug)]
pub enum BundleEvent<'a> {
    /// The output directory exists, copies are about to start
    OutputReady(&'a Path),
    Copied(&'a CopiedTemplate),
    Skipped(&'a str),
}

/// Outcome of a successful bundle copy
#[derive(Debug, Default)]
pub struct BundleReport {
    pub copied: Vec<CopiedTemplate>,
    /// Sub-directories found in the templates directory and left alone
    pub skipped: Vec<String>,
}

pub fn copy_templates<F>(
    templates_dir: &Path,
    output_dir: &Path,
    mut on_event: F,
) -> Result<BundleReport>
where
    F: FnMut(BundleEvent<'_>),
{
    fs::create_dir_all(output_dir).map_err(|e| MokujinError::io_at("create", output_dir, e))?;
    on_event(BundleEvent::OutputReady(output_dir));

    let mut report = BundleReport::default();

    for entry in WalkDir::new(templates_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            MokujinError::io(
                format!("cannot read templates directory {}", templates_dir.display()),
                io::Error::from(e),
            )
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            debug!(name = %name, "skipping sub-directory");
            on_event(BundleEvent::Skipped(&name));
            report.skipped.push(name);
            continue;
        }

        let bytes = copy_file(entry.path(), &output_dir.join(entry.file_name())).map_err(|e| {
            MokujinError::Copy {
                name: name.clone(),
                source: Box::new(e),
            }
        })?;
        debug!(name = %name, bytes, "copied template");

        let copied = CopiedTemplate { name, bytes };
        on_event(BundleEvent::Copied(&copied));
        report.copied.push(copied);
    }

    Ok(report)
}
