//! @dose
//! purpose: This module implements the generate command, which resolves the templates
//!     directory and copies its files into <cwd>/documentation.
//!
//! when-editing:
//!     - !Resolution happens before anything is created, so a missing templates
//!       directory leaves the working directory untouched
//!     - Status lines go to stdout; failures are returned to main, which marks and prints them
//!
//! flows:
//!     - Resolve: output dir and templates dir (beside the executable, else <cwd>/templates)
//!     - Copy: create documentation/, copy each top-level template, report each one

use crate::bundle::{copy_templates, BundleEvent, BundleReport};
use crate::cli::GenerateArgs;
use crate::resolver::{Resolution, TemplateSource};
use anyhow::Result;
use tracing::info;

pub fn run_generate(_args: &GenerateArgs) -> Result<()> {
    let resolution = Resolution::from_env()?;
    generate(&resolution)?;
    Ok(())
}

/// Copy the templates for an already resolved invocation, printing progress.
pub fn generate(resolution: &Resolution) -> Result<BundleReport> {
    let templates = &resolution.templates;
    match templates.source {
        TemplateSource::Executable => {
            info!(path = %templates.dir.display(), "using templates beside the executable")
        }
        TemplateSource::WorkingDirectory => {
            info!(path = %templates.dir.display(), "using templates from the working directory")
        }
    }

    let report = copy_templates(&templates.dir, &resolution.output_dir, |event| match event {
        BundleEvent::OutputReady(dir) => {
            println!("📁 'documentation' directory ready at: {}", dir.display())
        }
        BundleEvent::Copied(copied) => println!("✓ {} copied", copied.name),
        BundleEvent::Skipped(_) => {}
    })?;

    println!("✅ Documentation generated successfully!");
    Ok(report)
}
