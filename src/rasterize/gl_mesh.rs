use std::convert::TryInto;

use memoffset::offset_of;

use super::{
    drawable::Drawable,
    shader::{builtins, ShaderError},
    Rasterize,
};
use crate::{glm, mesh::Mesh};

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct GLVert {
    pos: glm::Vec3,
}

impl GLVert {
    pub fn new(pos: glm::Vec3) -> Self {
        Self { pos }
    }
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    i1: gl::types::GLuint,
    i2: gl::types::GLuint,
    i3: gl::types::GLuint,
}

impl Triangle {
    pub fn new(i1: gl::types::GLuint, i2: gl::types::GLuint, i3: gl::types::GLuint) -> Self {
        Self { i1, i2, i3 }
    }
}

/// OpenGL buffers of a mesh
#[derive(Debug)]
struct GLMeshBuffers {
    vao: gl::types::GLuint,
    vbo: gl::types::GLuint,
    ebo: gl::types::GLuint,
}

/// Static mesh uploaded to the GPU, drawn with the builtin flat color
/// shader
#[derive(Debug)]
pub struct GLMesh {
    num_triangles: usize,
    buffers: Option<GLMeshBuffers>,
}

/// Per draw call data of a [`GLMesh`]
#[derive(Debug, Clone)]
pub struct GLMeshDrawData {
    model: glm::DMat4,
    color: glm::DVec3,
}

impl GLMeshDrawData {
    pub fn new(model: glm::DMat4, color: glm::DVec3) -> Self {
        Self { model, color }
    }
}

impl GLMesh {
    pub fn new(verts: &[GLVert], triangles: &[Triangle]) -> Self {
        let buffers = unsafe {
            let mut vao: gl::types::GLuint = 0;
            let mut vbo: gl::types::GLuint = 0;
            let mut ebo: gl::types::GLuint = 0;
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::GenBuffers(1, &mut ebo);
            GLMeshBuffers { vao, vbo, ebo }
        };

        if buffers.vao == 0 || buffers.vbo == 0 || buffers.ebo == 0 {
            panic!("vao, vbo, or ebo couldn't be initialized");
        }

        unsafe {
            gl::BindVertexArray(buffers.vao);

            gl::BindBuffer(gl::ARRAY_BUFFER, buffers.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (verts.len() * std::mem::size_of::<GLVert>())
                    .try_into()
                    .unwrap(),
                verts.as_ptr() as *const gl::types::GLvoid,
                gl::STATIC_DRAW,
            );

            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, buffers.ebo);
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                (triangles.len() * std::mem::size_of::<Triangle>())
                    .try_into()
                    .unwrap(),
                triangles.as_ptr() as *const gl::types::GLvoid,
                gl::STATIC_DRAW,
            );

            // positions at attribute location 0
            gl::EnableVertexAttribArray(0);
            gl::VertexAttribPointer(
                0,
                3,
                gl::FLOAT,
                gl::FALSE,
                std::mem::size_of::<GLVert>().try_into().unwrap(),
                offset_of!(GLVert, pos) as *const gl::types::GLvoid,
            );

            gl::BindVertexArray(0);
        }

        Self {
            num_triangles: triangles.len(),
            buffers: Some(buffers),
        }
    }

    pub fn from_mesh(mesh: &Mesh) -> Self {
        let verts: Vec<GLVert> = mesh
            .get_positions()
            .iter()
            .map(|pos| GLVert::new(glm::convert(*pos)))
            .collect();
        let triangles: Vec<Triangle> = mesh
            .get_triangles()
            .iter()
            .map(|[i1, i2, i3]| Triangle::new(*i1, *i2, *i3))
            .collect();
        Self::new(&verts, &triangles)
    }

    pub fn get_num_triangles(&self) -> usize {
        self.num_triangles
    }
}

impl Rasterize for GLMesh {
    fn cleanup_opengl(&mut self) {
        if let Some(buffers) = self.buffers.take() {
            unsafe {
                gl::DeleteVertexArrays(1, &buffers.vao);
                gl::DeleteBuffers(1, &buffers.vbo);
                gl::DeleteBuffers(1, &buffers.ebo);
            }
        }
    }
}

impl Drop for GLMesh {
    fn drop(&mut self) {
        self.cleanup_opengl();
    }
}

impl Drawable for GLMesh {
    type ExtraData = GLMeshDrawData;
    type Error = ShaderError;

    fn draw(&self, extra_data: &mut GLMeshDrawData) -> Result<(), ShaderError> {
        let buffers = match &self.buffers {
            Some(buffers) => buffers,
            None => return Ok(()),
        };

        let flat_color_shader = builtins::get_flat_color_shader()
            .as_ref()
            .map_err(Clone::clone)?;

        flat_color_shader.use_shader();
        flat_color_shader.set_mat4("model\0", &glm::convert(extra_data.model));
        flat_color_shader.set_vec3("color\0", &glm::convert(extra_data.color));

        unsafe {
            gl::BindVertexArray(buffers.vao);
            gl::DrawElements(
                gl::TRIANGLES,
                (3 * self.num_triangles).try_into().unwrap(),
                gl::UNSIGNED_INT,
                std::ptr::null(),
            );
            gl::BindVertexArray(0);
        }
        Ok(())
    }
}
