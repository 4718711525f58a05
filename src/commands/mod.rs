mod generate;
mod version;

pub use generate::*;
pub use version::*;
