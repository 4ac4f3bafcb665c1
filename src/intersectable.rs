use crate::glm;
use crate::ray::Ray;

#[derive(Debug, Clone, Copy)]
pub struct IntersectInfo {
    t: f64,
    point: glm::DVec3,
    normal: glm::DVec3,
}

impl IntersectInfo {
    pub fn new(t: f64, point: glm::DVec3, normal: glm::DVec3) -> Self {
        Self { t, point, normal }
    }

    /// Distance along the ray in units of the ray direction
    pub fn get_t(&self) -> f64 {
        self.t
    }

    pub fn get_point(&self) -> &glm::DVec3 {
        &self.point
    }

    /// Outward facing normal at the intersection point
    pub fn get_normal(&self) -> &glm::DVec3 {
        &self.normal
    }
}

pub trait Intersectable {
    /// Nearest intersection of `ray` with `self` such that `t_min <=
    /// t <= t_max`.
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<IntersectInfo>;
}
