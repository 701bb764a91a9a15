/// Driver module - the graphics driver seam and stage kinds

pub mod shader_driver;
pub mod stage_kind;

pub use shader_driver::*;
pub use stage_kind::*;

// Mock driver for tests (no GL context required)
#[cfg(test)]
pub mod mock_driver;
