pub mod drawable;
pub mod gl_mesh;
pub mod renderer;
pub mod shader;

pub trait Rasterize {
    /// Free the OpenGL objects owned, must be called with the context
    /// that created them current
    fn cleanup_opengl(&mut self);
}
