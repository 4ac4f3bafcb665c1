pub mod builtins;

use std::f64::consts::{FRAC_PI_2, PI};

use crate::glm;

/// Indexed triangle mesh, positions only
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<glm::DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn new(positions: Vec<glm::DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        debug_assert!(triangles
            .iter()
            .flatten()
            .all(|index| (*index as usize) < positions.len()));
        Self {
            positions,
            triangles,
        }
    }

    /// UV sphere centered at the origin.
    ///
    /// `sectors` is the number of slices around the z axis and
    /// `stacks` the number of slices from pole to pole. The stacks
    /// touching the poles have a single triangle per sector.
    pub fn uv_sphere(radius: f64, sectors: u32, stacks: u32) -> Self {
        assert!(sectors >= 3 && stacks >= 2);
        let sector_step = 2.0 * PI / sectors as f64;
        let stack_step = PI / stacks as f64;

        let mut positions = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
        for i in 0..=stacks {
            let stack_angle = FRAC_PI_2 - i as f64 * stack_step;
            let xy = radius * stack_angle.cos();
            let z = radius * stack_angle.sin();

            for j in 0..=sectors {
                let sector_angle = j as f64 * sector_step;
                positions.push(glm::vec3(
                    xy * sector_angle.cos(),
                    xy * sector_angle.sin(),
                    z,
                ));
            }
        }

        let mut triangles = Vec::with_capacity((2 * sectors * (stacks - 1)) as usize);
        for i in 0..stacks {
            let mut k1 = i * (sectors + 1);
            let mut k2 = k1 + sectors + 1;

            for _ in 0..sectors {
                if i != 0 {
                    triangles.push([k1, k2, k1 + 1]);
                }
                if i != stacks - 1 {
                    triangles.push([k1 + 1, k2, k2 + 1]);
                }
                k1 += 1;
                k2 += 1;
            }
        }

        Self::new(positions, triangles)
    }

    /// Axis aligned cube of side 1 centered at the origin
    pub fn cube() -> Self {
        let positions = vec![
            glm::vec3(-0.5, -0.5, -0.5),
            glm::vec3(0.5, -0.5, -0.5),
            glm::vec3(0.5, 0.5, -0.5),
            glm::vec3(-0.5, 0.5, -0.5),
            glm::vec3(-0.5, -0.5, 0.5),
            glm::vec3(0.5, -0.5, 0.5),
            glm::vec3(0.5, 0.5, 0.5),
            glm::vec3(-0.5, 0.5, 0.5),
        ];
        let triangles = vec![
            // -z
            [0, 1, 3],
            [1, 2, 3],
            // +x
            [1, 5, 2],
            [5, 6, 2],
            // +z
            [5, 4, 6],
            [4, 7, 6],
            // -x
            [4, 0, 7],
            [0, 3, 7],
            // -y
            [4, 5, 0],
            [5, 1, 0],
            // +y
            [3, 2, 7],
            [2, 6, 7],
        ];
        Self::new(positions, triangles)
    }

    pub fn get_positions(&self) -> &[glm::DVec3] {
        &self.positions
    }

    pub fn get_triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_uv_sphere() {
        let sphere = Mesh::uv_sphere(2.0, 36, 18);
        assert_eq!(sphere.get_positions().len(), 19 * 37);
        assert_eq!(sphere.get_triangles().len(), 1224);
        assert!(sphere
            .get_positions()
            .iter()
            .all(|pos| (glm::length(pos) - 2.0).abs() < 1e-9));
        assert!(sphere
            .get_triangles()
            .iter()
            .flatten()
            .all(|index| (*index as usize) < sphere.get_positions().len()));
    }

    #[test]
    fn mesh_uv_sphere_no_degenerate_pole_triangles() {
        let sphere = Mesh::uv_sphere(1.0, 8, 4);
        assert!(sphere.get_triangles().iter().all(|[a, b, c]| {
            let (a, b, c) = (
                sphere.get_positions()[*a as usize],
                sphere.get_positions()[*b as usize],
                sphere.get_positions()[*c as usize],
            );
            glm::length(&glm::cross(&(b - a), &(c - a))) > 1e-9
        }));
    }

    #[test]
    fn mesh_cube() {
        let cube = Mesh::cube();
        assert_eq!(cube.get_positions().len(), 8);
        assert_eq!(cube.get_triangles().len(), 12);
        assert!(cube
            .get_positions()
            .iter()
            .flat_map(|pos| pos.iter())
            .all(|v| (v.abs() - 0.5).abs() < f64::EPSILON));
    }
}
