/// ShaderProgram - an owned, linked program object

use std::fmt;
use std::rc::Rc;

use crate::config::{CompilerConfig, LinkFailurePolicy};
use crate::driver::{ProgramId, ShaderDriver, ShaderStageFlags};
use crate::error::{Error, ErrorKind, Result, Severity};
use crate::shader::ShaderStage;

/// Link / validate outcome recorded when the program was built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramStatus {
    /// Driver reported `LINK_STATUS == TRUE`
    pub linked: bool,
    /// Driver reported `VALIDATE_STATUS == TRUE`
    pub validated: bool,
    /// Last linker / validator output (empty when both succeeded)
    pub info_log: String,
}

impl ProgramStatus {
    /// Usable only once link AND validate both succeeded
    pub fn is_usable(&self) -> bool {
        self.linked && self.validated
    }

    /// Failure record describing why the program is not usable
    ///
    /// A failed link is an `Error`; a program that linked but failed
    /// validation yields a `Warning`.
    pub fn diagnostic(&self) -> Option<Error> {
        if !self.linked {
            Some(Error::link(self.info_log.clone()))
        } else if !self.validated {
            Some(Error::new(
                ErrorKind::LinkOrValidate { log: self.info_log.clone() },
                format!("Failed to validate, Message: {}", self.info_log),
                Severity::Warning,
            ))
        } else {
            None
        }
    }
}

/// Linked shader program
///
/// Not `Clone`; the program object is deleted on drop unless released with
/// [`ShaderProgram::into_raw`]. Stage objects are link-time inputs only and
/// are already released by the time a `ShaderProgram` is returned.
pub struct ShaderProgram {
    id: ProgramId,
    stages: ShaderStageFlags,
    status: ProgramStatus,
    driver: Rc<dyn ShaderDriver>,
    owned: bool,
}

impl ShaderProgram {
    /// Attach `stages`, link, validate, then release the stages
    ///
    /// A failed link returns a `LinkOrValidate` error under
    /// [`LinkFailurePolicy::Strict`] (the program object is released), and is
    /// only recorded in [`ShaderProgram::status`] under `Lenient`, where the
    /// program is not validated and the link log is kept. A failed
    /// validation never fails the call; it is logged as a warning and recorded
    /// in the status.
    pub fn link(
        driver: &Rc<dyn ShaderDriver>,
        stages: Vec<ShaderStage>,
        config: &CompilerConfig,
    ) -> Result<Self> {
        let id = driver
            .create_program()
            .map_err(|msg| Error::link(msg).with_backtrace(config.backtrace))?;

        let mut program = Self {
            id,
            stages: ShaderStageFlags::empty(),
            status: ProgramStatus::default(),
            driver: Rc::clone(driver),
            owned: true,
        };

        for stage in &stages {
            driver.attach_shader(id, stage.id());
            program.stages |= stage.kind().flag();
        }

        driver.link_program(id);
        program.status.linked = driver.program_link_status(id);
        if !program.status.linked {
            let log = driver.program_info_log(id);
            program.status.info_log = log.clone();
            match config.link_failure {
                LinkFailurePolicy::Strict => {
                    return Err(Error::link(log).with_backtrace(config.backtrace));
                }
                LinkFailurePolicy::Lenient => {
                    crate::forge_warn!(
                        "glforge::program",
                        "Program {} failed to link: {}",
                        id.get(), log.trim_end()
                    );
                }
            }
        }

        // Validation overwrites the info log; an unlinked program keeps its link log
        if program.status.linked {
            driver.validate_program(id);
            program.status.validated = driver.program_validate_status(id);
            if !program.status.validated {
                let log = driver.program_info_log(id);
                crate::forge_warn!(
                    "glforge::program",
                    "Program {} failed validation: {}",
                    id.get(), log.trim_end()
                );
                program.status.info_log = log;
            }
        }

        // Stages are not needed past link time
        drop(stages);

        crate::forge_debug!(
            "glforge::program",
            "Program {} built from {:?} (usable: {})",
            id.get(), program.stages, program.status.is_usable()
        );
        Ok(program)
    }

    pub fn id(&self) -> ProgramId {
        self.id
    }

    /// Stages that were attached at link time
    pub fn stages(&self) -> ShaderStageFlags {
        self.stages
    }

    pub fn status(&self) -> &ProgramStatus {
        &self.status
    }

    pub fn is_usable(&self) -> bool {
        self.status.is_usable()
    }

    /// Give up ownership without deleting the driver object
    pub fn into_raw(mut self) -> ProgramId {
        self.owned = false;
        self.id
    }
}

impl fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("id", &self.id)
            .field("stages", &self.stages)
            .field("status", &self.status)
            .finish()
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        if self.owned {
            self.driver.delete_program(self.id);
        }
    }
}

#[cfg(test)]
#[path = "shader_program_tests.rs"]
mod tests;
