pub mod camera;
pub mod config;
pub mod fps;
pub mod game;
pub mod input;
pub mod inputs;
pub mod intersectable;
pub mod logging;
pub mod mesh;
pub mod rasterize;
pub mod ray;
pub mod sphere;
pub mod target;
pub mod target_manager;
pub mod util;

pub use nalgebra_glm as glm;
