use rand::{rngs::StdRng, SeedableRng};

use crate::glm;
use crate::intersectable::Intersectable;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::target::{PlacementBounds, Target};

/// Owns every target of the scene along with the random number
/// generator used to place them.
#[derive(Debug)]
pub struct TargetManager {
    targets: Vec<Target>,
    bounds: PlacementBounds,
    rng: StdRng,
}

impl TargetManager {
    /// Create `count` targets of the given `radius` within `bounds`.
    ///
    /// All targets are first placed ignoring each other, then each
    /// one is placed again against all the others.
    pub fn new(count: usize, bounds: PlacementBounds, radius: f64, mut rng: StdRng) -> Self {
        let targets = (0..count)
            .map(|_| Target::new(&bounds, radius, &[], &mut rng))
            .collect();

        let mut manager = Self {
            targets,
            bounds,
            rng,
        };

        for index in 0..manager.targets.len() {
            let others = manager.others(index);
            manager.targets[index].reset(&manager.bounds, &others, &mut manager.rng);
        }

        log::debug!(
            "placed {} targets within {:?}",
            manager.targets.len(),
            manager.bounds
        );

        manager
    }

    /// Same as [`Self::new()`], the generator is seeded with `seed`
    /// if available, from system entropy otherwise.
    pub fn with_seed(
        count: usize,
        bounds: PlacementBounds,
        radius: f64,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(count, bounds, radius, rng)
    }

    pub fn get_targets(&self) -> &[Target] {
        &self.targets
    }

    /// Targets that have not been hit yet
    pub fn get_active_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|target| !target.is_hit())
    }

    pub fn get_bounds(&self) -> &PlacementBounds {
        &self.bounds
    }

    /// Spheres of all targets except the one at `index`
    fn others(&self, index: usize) -> Vec<Sphere> {
        self.targets
            .iter()
            .enumerate()
            .filter(|(other_index, _)| *other_index != index)
            .map(|(_, target)| target.as_sphere())
            .collect()
    }

    /// Mark every target not already hit that `ray` passes through as
    /// hit. Returns the number of targets hit.
    pub fn shoot(&mut self, ray: &Ray) -> usize {
        let mut num_hit = 0;
        for target in self
            .targets
            .iter_mut()
            .filter(|target| !target.is_hit())
        {
            if target.check_ray_intersection(ray) {
                if let Some(info) = target.as_sphere().hit(ray, 0.0, f64::INFINITY) {
                    log::debug!(
                        "target at {:?} hit at distance {:.3}",
                        target.get_position(),
                        info.get_t() * glm::length(ray.get_direction())
                    );
                }
                target.set_hit(true);
                num_hit += 1;
            }
        }
        num_hit
    }

    /// Check if `ray` hits any target, see [`Self::shoot()`].
    pub fn check_hits(&mut self, ray: &Ray) -> bool {
        self.shoot(ray) > 0
    }

    /// Place every hit target at a new position. Returns the number
    /// of targets that were reset.
    pub fn reset_hit_targets(&mut self) -> usize {
        let mut num_reset = 0;
        for index in 0..self.targets.len() {
            if self.targets[index].is_hit() {
                let others = self.others(index);
                self.targets[index].reset(&self.bounds, &others, &mut self.rng);
                num_reset += 1;
            }
        }
        num_reset
    }
}
