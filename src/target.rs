use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::glm;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Number of positions tried before giving up on finding a spot that
/// does not overlap any other target.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Minimum distance between two targets as a factor of the sum of
/// their radii.
pub const TARGET_SPACING: f64 = 1.2;

/// Rectangle on the plane `z = const` within which target centers are
/// sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub z: f64,
}

impl PlacementBounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64, z: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            z,
        }
    }

    /// Bounds are usable when every value is finite and neither range
    /// is inverted. A range may be empty (min == max). The width of
    /// each range must be finite too for uniform sampling.
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.max_x, self.min_y, self.max_y, self.z]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
            && (self.max_x - self.min_x).is_finite()
            && (self.max_y - self.min_y).is_finite()
    }

    pub fn contains(&self, point: &glm::DVec3) -> bool {
        point[0] >= self.min_x
            && point[0] <= self.max_x
            && point[1] >= self.min_y
            && point[1] <= self.max_y
            && (point[2] - self.z).abs() < f64::EPSILON
    }

    /// Uniformly sample a point within the bounds. Bounds must be
    /// valid, see [`Self::is_valid()`].
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> glm::DVec3 {
        debug_assert!(self.is_valid());
        glm::vec3(
            rng.gen_range(self.min_x..=self.max_x),
            rng.gen_range(self.min_y..=self.max_y),
            self.z,
        )
    }
}

impl Default for PlacementBounds {
    fn default() -> Self {
        Self::new(-5.0, 5.0, 1.0, 6.0, -10.0)
    }
}

/// Result of trying to place a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Found a non overlapping position after `attempts` tries
    Accepted { attempts: usize },
    /// All attempts overlapped some other target, the last sampled
    /// position was kept
    Exhausted,
}

impl Placement {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Placement::Accepted { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    position: glm::DVec3,
    radius: f64,
    hit: bool,
}

impl Target {
    /// Create a new target placed within `bounds` avoiding the
    /// `existing` targets.
    pub fn new<R: Rng + ?Sized>(
        bounds: &PlacementBounds,
        radius: f64,
        existing: &[Sphere],
        rng: &mut R,
    ) -> Self {
        let mut target = Self {
            position: glm::vec3(0.0, 0.0, bounds.z),
            radius,
            hit: false,
        };
        target.place(bounds, existing, rng);
        target
    }

    pub fn get_position(&self) -> &glm::DVec3 {
        &self.position
    }

    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn set_hit(&mut self, hit: bool) {
        self.hit = hit;
    }

    pub fn as_sphere(&self) -> Sphere {
        Sphere::new(self.position, self.radius)
    }

    /// Rejection sampling of the target position.
    ///
    /// `existing` must not contain `self`.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        bounds: &PlacementBounds,
        existing: &[Sphere],
        rng: &mut R,
    ) -> Placement {
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            self.position = bounds.sample(rng);

            let candidate = self.as_sphere();
            if existing
                .iter()
                .all(|other| !candidate.overlaps(other, TARGET_SPACING))
            {
                return Placement::Accepted { attempts: attempt };
            }
        }

        log::warn!(
            "no free spot found for target after {} attempts, keeping overlapping position {:?}",
            MAX_PLACEMENT_ATTEMPTS,
            self.position
        );
        Placement::Exhausted
    }

    /// Move the target to a new position and make it shootable again.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        bounds: &PlacementBounds,
        existing: &[Sphere],
        rng: &mut R,
    ) -> Placement {
        let placement = self.place(bounds, existing, rng);
        self.hit = false;
        placement
    }

    pub fn check_ray_intersection(&self, ray: &Ray) -> bool {
        self.as_sphere().intersect_ray(ray)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn target_new_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = PlacementBounds::default();
        for _ in 0..50 {
            let target = Target::new(&bounds, 0.25, &[], &mut rng);
            assert!(bounds.contains(target.get_position()));
            assert!(!target.is_hit());
        }
    }

    #[test]
    fn target_place_avoids_existing() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = PlacementBounds::default();
        let existing = vec![
            Sphere::new(glm::vec3(0.0, 3.5, -10.0), 0.25),
            Sphere::new(glm::vec3(2.0, 2.0, -10.0), 0.25),
            Sphere::new(glm::vec3(-3.0, 5.0, -10.0), 0.25),
        ];
        let mut target = Target::new(&bounds, 0.25, &[], &mut rng);
        let placement = target.place(&bounds, &existing, &mut rng);

        assert!(placement.is_accepted());
        let sphere = target.as_sphere();
        assert!(existing
            .iter()
            .all(|other| !sphere.overlaps(other, TARGET_SPACING)));
    }

    #[test]
    fn target_place_empty_existing_first_attempt() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut target = Target::new(&PlacementBounds::default(), 0.25, &[], &mut rng);
        assert_eq!(
            target.place(&PlacementBounds::default(), &[], &mut rng),
            Placement::Accepted { attempts: 1 }
        );
    }

    #[test]
    fn target_place_exhausted_keeps_last_position() {
        let mut rng = StdRng::seed_from_u64(3);
        // only one possible position and it is taken
        let bounds = PlacementBounds::new(1.0, 1.0, 2.0, 2.0, -10.0);
        let existing = vec![Sphere::new(glm::vec3(1.0, 2.0, -10.0), 0.25)];
        let mut target = Target::new(&bounds, 0.25, &[], &mut rng);

        assert_eq!(
            target.place(&bounds, &existing, &mut rng),
            Placement::Exhausted
        );
        assert_eq!(*target.get_position(), glm::vec3(1.0, 2.0, -10.0));
    }

    #[test]
    fn target_reset_clears_hit() {
        let mut rng = StdRng::seed_from_u64(9);
        let bounds = PlacementBounds::default();
        let mut target = Target::new(&bounds, 0.25, &[], &mut rng);
        target.set_hit(true);
        target.reset(&bounds, &[], &mut rng);
        assert!(!target.is_hit());
        assert!(bounds.contains(target.get_position()));
    }

    #[test]
    fn target_check_ray_intersection() {
        let mut rng = StdRng::seed_from_u64(5);
        let bounds = PlacementBounds::new(0.0, 0.0, 2.0, 2.0, -10.0);
        let target = Target::new(&bounds, 0.25, &[], &mut rng);

        let origin = glm::vec3(0.0, 0.0, 3.0);
        let towards = target.get_position() - origin;
        assert!(target.check_ray_intersection(&Ray::new(origin, towards)));
        assert!(!target.check_ray_intersection(&Ray::new(origin, -towards)));
        assert!(!target.check_ray_intersection(&Ray::new(origin, glm::vec3(0.0, 0.0, -1.0))));
    }

    #[test]
    fn placement_bounds_validity() {
        assert!(PlacementBounds::default().is_valid());
        assert!(PlacementBounds::new(1.0, 1.0, 2.0, 2.0, 0.0).is_valid());
        assert!(!PlacementBounds::new(5.0, -5.0, 1.0, 6.0, -10.0).is_valid());
        assert!(!PlacementBounds::new(-5.0, 5.0, 1.0, f64::NAN, -10.0).is_valid());
        assert!(!PlacementBounds::new(-1e308, 1e308, 1.0, 6.0, -10.0).is_valid());
        assert!(!PlacementBounds::new(-5.0, 5.0, -1e308, 1e308, -10.0).is_valid());
    }
}
