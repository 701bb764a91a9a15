//! Built-in GLSL sources
//!
//! A pass-through vertex shader and a generator for solid-colour fragment
//! shaders, enough to get geometry on screen without any shader files.

/// GLSL 330 vertex shader forwarding a 2-D position (attribute 0) unchanged
pub const BASE_VERTEX_SHADER: &str = r#"#version 330 core

layout (location = 0) in vec2 aPos;

void main() {
    gl_Position = vec4(aPos, 0.0, 1.0);
}
"#;

/// Map an 8-bit channel onto [0, 1]
pub fn normalize_channel(value: u8) -> f32 {
    f32::from(value) / f32::from(u8::MAX)
}

/// GLSL 330 fragment shader writing one constant RGBA colour
pub fn solid_color_fragment_source(red: u8, green: u8, blue: u8, alpha: u8) -> String {
    format!(
        r#"#version 330 core
out vec4 FragColor;

void main() {{
    FragColor = vec4({:.6}, {:.6}, {:.6}, {:.6});
}}
"#,
        normalize_channel(red),
        normalize_channel(green),
        normalize_channel(blue),
        normalize_channel(alpha),
    )
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
