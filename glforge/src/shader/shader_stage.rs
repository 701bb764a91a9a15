/// ShaderStage - an owned, successfully compiled shader object

use std::fmt;
use std::rc::Rc;

use crate::config::BacktraceMode;
use crate::driver::{ShaderDriver, ShaderId, ShaderStageKind};
use crate::error::{Error, Result};

/// Compiled shader stage
///
/// Only produced by a successful compile, so the wrapped id is always a valid
/// driver object. Not `Clone`: the driver object has a single owner, and it is
/// deleted when the owner drops (unless released with [`ShaderStage::into_raw`]).
pub struct ShaderStage {
    id: ShaderId,
    kind: ShaderStageKind,
    driver: Rc<dyn ShaderDriver>,
    owned: bool,
}

impl ShaderStage {
    /// Create, source and compile one stage
    ///
    /// On failure the driver log is returned verbatim inside the error and the
    /// shader object is deleted before returning.
    pub fn compile(
        driver: &Rc<dyn ShaderDriver>,
        source: &str,
        kind: ShaderStageKind,
        backtrace: BacktraceMode,
    ) -> Result<Self> {
        let id = driver
            .create_shader(kind)
            .map_err(|msg| Error::stage_compile(kind, msg).with_backtrace(backtrace))?;

        // From here on the guard deletes the object on every exit path
        let stage = Self {
            id,
            kind,
            driver: Rc::clone(driver),
            owned: true,
        };

        crate::forge_trace!(
            "glforge::stage",
            "Compiling {} ({} bytes) as shader {}",
            kind, source.len(), id.get()
        );
        driver.shader_source(id, source);
        driver.compile_shader(id);

        if !driver.shader_compile_status(id) {
            let log = driver.shader_info_log(id);
            crate::forge_debug!("glforge::stage", "{} {} rejected by driver", kind, id.get());
            return Err(Error::stage_compile(kind, log).with_backtrace(backtrace));
        }

        Ok(stage)
    }

    pub fn id(&self) -> ShaderId {
        self.id
    }

    pub fn kind(&self) -> ShaderStageKind {
        self.kind
    }

    /// Give up ownership without deleting the driver object
    pub fn into_raw(mut self) -> ShaderId {
        self.owned = false;
        self.id
    }
}

impl fmt::Debug for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderStage")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Drop for ShaderStage {
    fn drop(&mut self) {
        if self.owned {
            self.driver.delete_shader(self.id);
        }
    }
}

#[cfg(test)]
#[path = "shader_stage_tests.rs"]
mod tests;
