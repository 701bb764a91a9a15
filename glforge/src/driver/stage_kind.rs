/// Shader stage kinds and stage sets

use bitflags::bitflags;

/// Shader pipeline stage
///
/// Closed set: only these six kinds can be compiled. Raw enum values coming
/// from outside go through `TryFrom<u32>`, which rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShaderStageKind {
    Vertex,
    TessControl,
    TessEvaluation,
    Geometry,
    Fragment,
    Compute,
}

impl ShaderStageKind {
    /// All stage kinds in pipeline order
    pub const ALL: [ShaderStageKind; 6] = [
        ShaderStageKind::Vertex,
        ShaderStageKind::TessControl,
        ShaderStageKind::TessEvaluation,
        ShaderStageKind::Geometry,
        ShaderStageKind::Fragment,
        ShaderStageKind::Compute,
    ];

    /// OpenGL enum value (`GL_VERTEX_SHADER`, ...)
    pub const fn gl_enum(self) -> u32 {
        match self {
            ShaderStageKind::Vertex => 0x8B31,
            ShaderStageKind::TessControl => 0x8E88,
            ShaderStageKind::TessEvaluation => 0x8E87,
            ShaderStageKind::Geometry => 0x8DD9,
            ShaderStageKind::Fragment => 0x8B30,
            ShaderStageKind::Compute => 0x91B9,
        }
    }

    /// Name used to annotate failure messages ("VertexShader", ...)
    pub const fn name(self) -> &'static str {
        match self {
            ShaderStageKind::Vertex => "VertexShader",
            ShaderStageKind::TessControl => "TessControlShader",
            ShaderStageKind::TessEvaluation => "TessEvaluationShader",
            ShaderStageKind::Geometry => "GeometryShader",
            ShaderStageKind::Fragment => "FragmentShader",
            ShaderStageKind::Compute => "ComputeShader",
        }
    }

    pub const fn flag(self) -> ShaderStageFlags {
        match self {
            ShaderStageKind::Vertex => ShaderStageFlags::VERTEX,
            ShaderStageKind::TessControl => ShaderStageFlags::TESS_CONTROL,
            ShaderStageKind::TessEvaluation => ShaderStageFlags::TESS_EVALUATION,
            ShaderStageKind::Geometry => ShaderStageFlags::GEOMETRY,
            ShaderStageKind::Fragment => ShaderStageFlags::FRAGMENT,
            ShaderStageKind::Compute => ShaderStageFlags::COMPUTE,
        }
    }
}

impl TryFrom<u32> for ShaderStageKind {
    type Error = u32;

    /// Validate a raw OpenGL shader type; the rejected value is returned as the error
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ShaderStageKind::ALL
            .into_iter()
            .find(|kind| kind.gl_enum() == value)
            .ok_or(value)
    }
}

impl std::fmt::Display for ShaderStageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Set of stages linked into a program
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ShaderStageFlags: u32 {
        const VERTEX          = 1 << 0;
        const TESS_CONTROL    = 1 << 1;
        const TESS_EVALUATION = 1 << 2;
        const GEOMETRY        = 1 << 3;
        const FRAGMENT        = 1 << 4;
        const COMPUTE         = 1 << 5;
    }
}

impl ShaderStageFlags {
    /// Whether the set contains `kind`
    pub fn has(self, kind: ShaderStageKind) -> bool {
        self.contains(kind.flag())
    }
}

#[cfg(test)]
#[path = "stage_kind_tests.rs"]
mod tests;
