/// Shader module - owned stages and programs, and the compiler that builds them

pub mod shader_stage;
pub mod shader_program;
pub mod source_reader;
pub mod compiler;
pub mod builtin;

pub use shader_stage::*;
pub use shader_program::*;
pub use source_reader::*;
pub use compiler::*;
