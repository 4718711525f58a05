//! @dose
//! purpose: Library crate root for mokujin. The binary is a thin clap front-end over these
//!     modules; everything that touches the filesystem lives here so it can be tested.
//!
//! when-editing:
//!     - !All public modules must be declared here with pub mod
//!     - Keep the re-export list organized by module
//!
//! gotchas:
//!     - The lib.rs is separate from main.rs - library consumers get lib, CLI gets main

pub mod bundle;
pub mod cli;
pub mod commands;
pub mod copier;
pub mod error;
pub mod logging;
pub mod resolver;

// Re-export main types for convenience
pub use bundle::{copy_templates, BundleEvent, BundleReport, CopiedTemplate};
pub use cli::{Cli, Commands, GenerateArgs};
pub use copier::copy_file;
pub use error::{ErrorKind, MokujinError};
pub use resolver::{
    resolve_templates_dir, Resolution, ResolvedTemplates, TemplateSource, OUTPUT_DIR_NAME,
    TEMPLATES_DIR_NAME,
};
