// Host-side tests for pure picking math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_sphere_hits_a_sphere_ahead_of_the_ray() {
    let origin = Vec3::ZERO;
    let dir = Vec3::new(0.0, 0.0, 1.0);
    let t = ray_sphere(origin, dir, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(t.is_some());
    let t = t.unwrap();
    assert!((t - 3.0).abs() < 1e-4, "expected entry at t=3, got {t}");
}

#[test]
fn ray_sphere_misses_a_sphere_off_axis() {
    let origin = Vec3::ZERO;
    let dir = Vec3::new(1.0, 0.0, 0.0);
    assert!(ray_sphere(origin, dir, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_ignores_spheres_behind_the_ray() {
    let origin = Vec3::ZERO;
    let dir = Vec3::new(0.0, 0.0, 1.0);
    assert!(ray_sphere(origin, dir, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn nearest_pick_prefers_the_closer_target() {
    let targets = [
        PickTarget {
            kind: PickKind::Pad(4),
            center: Vec3::new(0.0, 0.0, 10.0),
            radius: 2.0,
        },
        PickTarget {
            kind: PickKind::PowerButton,
            center: Vec3::new(0.0, 0.0, 5.0),
            radius: 2.0,
        },
    ];
    let picked = nearest_pick(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &targets);
    assert_eq!(picked, Some(PickKind::PowerButton));
}

#[test]
fn nearest_pick_returns_none_on_a_clean_miss() {
    let targets = [PickTarget {
        kind: PickKind::Pad(0),
        center: Vec3::new(10.0, 0.0, 0.0),
        radius: 1.0,
    }];
    assert_eq!(
        nearest_pick(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), &targets),
        None
    );
}

#[test]
fn nearest_pick_resolves_each_pad_distinctly() {
    // A row of pads; a ray aimed at each center must pick that pad
    let targets: Vec<PickTarget> = (0..4)
        .map(|i| PickTarget {
            kind: PickKind::Pad(i),
            center: Vec3::new(i as f32 * 5.0, 0.0, 10.0),
            radius: 2.0,
        })
        .collect();
    for i in 0..4 {
        let origin = Vec3::new(i as f32 * 5.0, 0.0, 0.0);
        let picked = nearest_pick(origin, Vec3::new(0.0, 0.0, 1.0), &targets);
        assert_eq!(picked, Some(PickKind::Pad(i)));
    }
}
