use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra_glm as glm;

use aim::ray::Ray;
use aim::sphere::Sphere;
use aim::target::PlacementBounds;
use aim::target_manager::TargetManager;

fn bench_sphere_intersect(c: &mut Criterion) {
    let sphere = Sphere::new(glm::vec3(0.0, 0.0, -10.0), 0.25);
    let hit = Ray::new(glm::vec3(0.0, 0.0, 3.0), glm::vec3(0.0, 0.0, -1.0));
    let miss = Ray::new(glm::vec3(0.0, 0.0, 3.0), glm::vec3(0.0, 1.0, -1.0));

    let mut group = c.benchmark_group("SphereIntersect");
    group.bench_with_input(BenchmarkId::new("hit", 1), &hit, |b, ray| {
        b.iter(|| black_box(&sphere).intersect_ray(black_box(ray)));
    });
    group.bench_with_input(BenchmarkId::new("miss", 2), &miss, |b, ray| {
        b.iter(|| black_box(&sphere).intersect_ray(black_box(ray)));
    });
    group.finish();
}

fn bench_target_manager(c: &mut Criterion) {
    let ray = Ray::new(glm::vec3(0.0, 0.0, 3.0), glm::vec3(0.0, 0.0, -1.0));

    let mut group = c.benchmark_group("TargetManager");
    for count in [10, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::new("place", count), count, |b, count| {
            b.iter(|| {
                TargetManager::with_seed(
                    black_box(*count),
                    PlacementBounds::default(),
                    0.25,
                    Some(0),
                )
            });
        });

        let mut target_manager =
            TargetManager::with_seed(*count, PlacementBounds::default(), 0.25, Some(0));
        group.bench_with_input(BenchmarkId::new("shoot_and_reset", count), &ray, |b, ray| {
            b.iter(|| {
                target_manager.shoot(black_box(ray));
                target_manager.reset_hit_targets()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere_intersect, bench_target_manager);
criterion_main!(benches);
