/*!
# glforge - OpenGL driver

OpenGL implementation of the glforge [`ShaderDriver`](glforge::glforge::ShaderDriver)
trait, built on the `gl` crate's function-pointer bindings.

The windowing / context layer is the caller's: create a context, make it
current, then hand its proc-address loader to [`GlDriver::load_with`].
*/

mod gl_driver;
pub mod debug;

pub use gl_driver::GlDriver;

// Re-export debug utilities
pub use debug::{debug_stats, print_debug_stats_report, reset_debug_stats, DebugConfig, DebugStats};
