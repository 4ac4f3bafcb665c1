use super::{
    drawable::Drawable,
    gl_mesh::{GLMesh, GLMeshDrawData},
    shader::{builtins, ShaderError},
};
use crate::{glm, mesh::builtins as mesh_builtins};

/// Background color of every frame
pub const CLEAR_COLOR: (f32, f32, f32) = (0.1, 0.1, 0.1);

/// GPU side of the builtin meshes, requires a current OpenGL context
/// for its entire lifetime.
#[derive(Debug)]
pub struct Renderer {
    sphere: GLMesh,
    cube: GLMesh,
}

impl Renderer {
    pub fn new() -> Result<Self, ShaderError> {
        // compile the shader up front so a broken driver fails at
        // startup instead of on the first draw
        builtins::display_uniform_and_attribute_info()?;

        let sphere = GLMesh::from_mesh(mesh_builtins::get_uv_sphere());
        let cube = GLMesh::from_mesh(mesh_builtins::get_cube());
        log::debug!(
            "uploaded sphere ({} triangles) and cube ({} triangles)",
            sphere.get_num_triangles(),
            cube.get_num_triangles()
        );

        Ok(Self { sphere, cube })
    }

    /// Enable depth testing and clear the color and depth buffers
    pub fn begin_frame(&self) {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::ClearColor(CLEAR_COLOR.0, CLEAR_COLOR.1, CLEAR_COLOR.2, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }

    /// Draw the unit sphere transformed by `model`
    pub fn draw_sphere(&self, model: &glm::DMat4, color: &glm::DVec3) -> Result<(), ShaderError> {
        self.sphere.draw(&mut GLMeshDrawData::new(*model, *color))
    }

    /// Draw the unit cube transformed by `model`
    pub fn draw_cube(&self, model: &glm::DMat4, color: &glm::DVec3) -> Result<(), ShaderError> {
        self.cube.draw(&mut GLMeshDrawData::new(*model, *color))
    }
}
