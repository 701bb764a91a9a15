/*!
# glforge

Core traits and types for compiling and linking GLSL shader programs.

This crate provides the platform-agnostic side of the pipeline: shader source
text goes in, a linked and validated program handle comes out, and every
driver-reported failure comes back as a structured [`glforge::Error`] value.
The graphics driver itself sits behind the [`glforge::ShaderDriver`] trait;
backend crates (OpenGL via `glforge_driver_gl`) provide the implementation.

## Architecture

- **ShaderDriver**: Trait seam over the raw driver calls
- **ShaderStage**: Owned, compiled shader stage (released on drop)
- **ShaderProgram**: Owned, linked program with a queryable status
- **ShaderCompiler**: Compile / link / load-from-file entry points
- **Forge**: Global logger registry
- **geometry**: Small fixed-dimension math types (Position, Vector, Triangle, Circle)
*/

// Internal modules
mod error;
mod forge;
mod config;
pub mod log;
pub mod driver;
pub mod shader;
pub mod geometry;

// Main glforge namespace module
pub mod glforge {
    // Error types
    pub use crate::error::{Error, ErrorKind, Result, Severity};

    // Logger registry
    pub use crate::forge::Forge;

    // Compiler configuration
    pub use crate::config::{BacktraceMode, CompilerConfig, LinkFailurePolicy};

    // Driver seam
    pub use crate::driver::{
        DriverResult, ProgramId, ShaderDriver, ShaderId, ShaderStageFlags, ShaderStageKind,
    };

    // Compiler
    pub use crate::shader::{
        FsSourceReader, ProgramStatus, ShaderCompiler, ShaderProgram, ShaderSourceReader,
        ShaderStage,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Built-in shader sources
    pub mod builtin {
        pub use crate::shader::builtin::*;
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }
}

// Re-export math library at crate root
pub use glam;
