use crate::glm;
use crate::intersectable::{IntersectInfo, Intersectable};
use crate::ray::Ray;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: glm::DVec3,
    radius: f64,
}

impl Sphere {
    pub fn new(center: glm::DVec3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn get_center(&self) -> &glm::DVec3 {
        &self.center
    }

    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    /// Coefficients of `a*t^2 + b*t + c = 0` for the points along
    /// `ray` that lie on the surface of the sphere.
    fn quadratic(&self, ray: &Ray) -> (f64, f64, f64) {
        let oc = ray.get_origin() - self.get_center();
        let a = glm::dot(ray.get_direction(), ray.get_direction());
        let b = 2.0 * glm::dot(&oc, ray.get_direction());
        let c = glm::dot(&oc, &oc) - self.radius * self.radius;
        (a, b, c)
    }

    /// Check if `ray` passes through the sphere.
    ///
    /// A ray that only grazes the surface (zero discriminant) does
    /// not count. The ray is a half line, a sphere entirely behind
    /// the ray origin is not intersected, a ray starting inside the
    /// sphere always is.
    pub fn intersect_ray(&self, ray: &Ray) -> bool {
        let (a, b, c) = self.quadratic(ray);
        if a <= 0.0 {
            return false;
        }
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return false;
        }

        let far_root = (-b + discriminant.sqrt()) / (2.0 * a);
        far_root >= 0.0
    }

    /// Check if the sphere is closer to `other` than the sum of their
    /// radii scaled by `spacing`.
    pub fn overlaps(&self, other: &Sphere, spacing: f64) -> bool {
        glm::distance(self.get_center(), other.get_center())
            < (self.radius + other.radius) * spacing
    }
}

impl Intersectable for Sphere {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<IntersectInfo> {
        let (a, b, c) = self.quadratic(ray);
        if a <= 0.0 {
            return None;
        }
        let half_b = b / 2.0;
        let discriminant = half_b * half_b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let mut root = (-half_b - sqrt_d) / a;
        if root < t_min || t_max < root {
            root = (-half_b + sqrt_d) / a;
            if root < t_min || t_max < root {
                return None;
            }
        }

        let point = ray.at(root);
        let outward_normal = (point - self.get_center()) / self.get_radius();
        Some(IntersectInfo::new(root, point, outward_normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_sphere() -> Sphere {
        Sphere::new(glm::vec3(0.0, 0.0, -10.0), 0.25)
    }

    #[test]
    fn sphere_intersect_ray_straight_on() {
        let ray = Ray::new(glm::vec3(0.0, 0.0, 0.0), glm::vec3(0.0, 0.0, -1.0));
        assert!(target_sphere().intersect_ray(&ray));
    }

    #[test]
    fn sphere_intersect_ray_unnormalized_direction() {
        let ray = Ray::new(glm::vec3(0.0, 0.0, 0.0), glm::vec3(0.0, 0.0, -7.5));
        assert!(target_sphere().intersect_ray(&ray));
    }

    #[test]
    fn sphere_intersect_ray_miss() {
        let ray = Ray::new(glm::vec3(0.3, 0.0, 0.0), glm::vec3(0.0, 0.0, -1.0));
        assert!(!target_sphere().intersect_ray(&ray));
    }

    #[test]
    fn sphere_intersect_ray_tangent_is_miss() {
        let ray = Ray::new(glm::vec3(0.25, 0.0, 0.0), glm::vec3(0.0, 0.0, -1.0));
        assert!(!target_sphere().intersect_ray(&ray));
    }

    #[test]
    fn sphere_intersect_ray_behind_origin() {
        let ray = Ray::new(glm::vec3(0.0, 0.0, 0.0), glm::vec3(0.0, 0.0, 1.0));
        assert!(!target_sphere().intersect_ray(&ray));
    }

    #[test]
    fn sphere_intersect_ray_from_inside() {
        let ray = Ray::new(glm::vec3(0.0, 0.1, -10.0), glm::vec3(0.0, 0.0, 1.0));
        assert!(target_sphere().intersect_ray(&ray));
    }

    #[test]
    fn sphere_intersect_ray_zero_direction() {
        let ray = Ray::new(glm::vec3(0.0, 0.0, -10.0), glm::zero());
        assert!(!target_sphere().intersect_ray(&ray));
    }

    #[test]
    fn sphere_hit_nearest_root() {
        let ray = Ray::new(glm::vec3(0.0, 0.0, 0.0), glm::vec3(0.0, 0.0, -1.0));
        let info = target_sphere().hit(&ray, 0.0, 1000.0).unwrap();
        assert!((info.get_t() - 9.75).abs() < 1e-9);
        assert!((info.get_point()[2] + 9.75).abs() < 1e-9);
        assert!((info.get_normal()[2] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sphere_hit_outside_range() {
        let ray = Ray::new(glm::vec3(0.0, 0.0, 0.0), glm::vec3(0.0, 0.0, -1.0));
        assert!(target_sphere().hit(&ray, 0.0, 5.0).is_none());
    }

    #[test]
    fn sphere_overlaps_with_spacing() {
        let a = Sphere::new(glm::vec3(0.0, 0.0, 0.0), 0.25);
        let close = Sphere::new(glm::vec3(0.55, 0.0, 0.0), 0.25);
        let far = Sphere::new(glm::vec3(0.7, 0.0, 0.0), 0.25);
        assert!(a.overlaps(&close, 1.2));
        assert!(!a.overlaps(&close, 1.0));
        assert!(!a.overlaps(&far, 1.2));
    }
}
