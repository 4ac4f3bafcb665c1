//! Load builtin shaders

use lazy_static::lazy_static;
use paste::paste;

use super::{Shader, ShaderError};
use crate::{camera::Camera, glm};

macro_rules! load_builtin_shader {
    ( $get_shader:ident ; $get_vert_code:ident ; $get_frag_code:ident ; $vert_location:tt ; $frag_location:tt ; $static_name:ident ) => {
        lazy_static! {
            static ref $static_name: Result<Shader, ShaderError> =
                { Shader::from_strings($get_vert_code(), $get_frag_code()) };
        }

        pub fn $get_vert_code() -> &'static str {
            include_str!($vert_location)
        }

        pub fn $get_frag_code() -> &'static str {
            include_str!($frag_location)
        }

        /// Compiled on first use, requires a current OpenGL context
        pub fn $get_shader() -> &'static Result<Shader, ShaderError> {
            &$static_name
        }
    };
}

macro_rules! load_builtin_shader_easy {
    ( $name:ident ; $vert_location:tt ; $frag_location:tt ) => {
        paste! {
            load_builtin_shader!([<get_ $name _shader>]; [<get_ $name _vert_code>]; [<get_ $name _frag_code>]; $vert_location; $frag_location; [<$name:upper>]);
        }
    }
}

load_builtin_shader_easy!(
    flat_color;
    "../../../shaders/flat_color.vert";
    "../../../shaders/flat_color.frag"
);

pub fn display_uniform_and_attribute_info() -> Result<(), ShaderError> {
    let flat_color_shader = get_flat_color_shader().as_ref().map_err(Clone::clone)?;

    log::debug!(
        "flat_color_shader: uniforms: {:?} attributes: {:?}",
        flat_color_shader.get_uniforms(),
        flat_color_shader.get_attributes(),
    );

    Ok(())
}

/// Set the per frame uniforms of all builtin shaders
pub fn setup_shaders(
    camera: &Camera,
    window_width: usize,
    window_height: usize,
) -> Result<(), ShaderError> {
    let projection_matrix =
        &glm::convert(camera.get_projection_matrix(window_width, window_height));
    let view_matrix = &glm::convert(camera.get_view_matrix());

    let flat_color_shader = get_flat_color_shader().as_ref().map_err(Clone::clone)?;

    flat_color_shader.use_shader();
    flat_color_shader.set_mat4("projection\0", projection_matrix);
    flat_color_shader.set_mat4("view\0", view_matrix);
    flat_color_shader.set_mat4("model\0", &glm::identity());

    Ok(())
}
