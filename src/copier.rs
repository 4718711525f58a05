//! Byte-for-byte copy of a single regular file.

use crate::error::{MokujinError, Result};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Copy `src` to `dst`, creating or truncating `dst`.
///
/// `src` must be a regular file; symlinks are followed. Returns the number of
/// bytes written. A failure during the transfer can leave `dst` truncated.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let meta = fs::metadata(src).map_err(|source| MokujinError::NotFound {
        path: src.to_path_buf(),
        source,
    })?;

    if !meta.is_file() {
        return Err(MokujinError::InvalidInput {
            path: src.to_path_buf(),
        });
    }

    let mut source = File::open(src).map_err(|e| MokujinError::io_at("open", src, e))?;
    let mut destination = File::create(dst).map_err(|e| MokujinError::io_at("create", dst, e))?;

    io::copy(&mut source, &mut destination).map_err(|e| {
        MokujinError::io(
            format!("cannot copy {} to {}", src.display(), dst.display()),
            e,
        )
    })
}
