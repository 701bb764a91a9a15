/// Shader source loading

use std::fs;
use std::io;
use std::path::Path;

/// Where shader source files come from
///
/// The compiler checks every path with `is_file` before it reads any of them.
pub trait ShaderSourceReader {
    /// Whether `path` denotes an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Whole-file read as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads shader sources from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceReader;

impl ShaderSourceReader for FsSourceReader {
    fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
