//! Integration tests for sliding against several walls at once
//!
//! Scenes are built from a floor and upright walls; every test checks the
//! displacement the resolver hands back for one tick.

use crate::foundation::math::Vec3;
use crate::physics::{ContactKind, MotionResolver, Wall};
use approx::{assert_abs_diff_eq, assert_relative_eq};

/// 20x20 floor at y = 0 facing +y
fn floor() -> Wall {
    Wall::new(
        Vec3::new(-10.0, 0.0, -10.0),
        Vec3::new(-10.0, 0.0, 10.0),
        Vec3::new(10.0, 0.0, 10.0),
    )
    .unwrap()
}

/// 10x10 wall in the x = 5 plane facing -x
fn east_wall() -> Wall {
    Wall::new(
        Vec3::new(5.0, -5.0, -5.0),
        Vec3::new(5.0, -5.0, 5.0),
        Vec3::new(5.0, 5.0, 5.0),
    )
    .unwrap()
}

#[test]
fn test_slides_along_upright_wall() {
    let resolver = MotionResolver::default();
    let velocity = resolver.collide_with_world(&Vec3::new(3.0, 0.0, 0.0), &Vec3::new(4.0, 0.0, 2.0), &[east_wall()]);

    // Only the component along the wall survives
    assert_relative_eq!(velocity, Vec3::new(0.0, 0.0, 2.0), epsilon = 1e-5);
}

#[test]
fn test_corner_keeps_only_free_direction() {
    let resolver = MotionResolver::default();
    let origin = Vec3::new(3.0, 1.5, 0.0);
    let velocity = Vec3::new(4.0, -1.0, 3.0);

    let resolution = resolver.resolve(&origin, &velocity, &[floor(), east_wall()]).unwrap();
    assert_relative_eq!(resolution.velocity, Vec3::new(0.0, 0.0, 3.0), epsilon = 1e-5);
    assert_eq!(resolution.contacts, 2);

    // Wall order does not change the outcome here
    let reversed = resolver.collide_with_world(&origin, &velocity, &[east_wall(), floor()]);
    assert_relative_eq!(reversed, Vec3::new(0.0, 0.0, 3.0), epsilon = 1e-5);
}

#[test]
fn test_fast_sweep_does_not_tunnel() {
    let wall = Wall::new(
        Vec3::new(-5.0, -5.0, 0.0),
        Vec3::new(5.0, -5.0, 0.0),
        Vec3::new(5.0, 5.0, 0.0),
    )
    .unwrap();
    let resolver = MotionResolver::default();
    let origin = Vec3::new(0.0, 0.0, 10.0);
    let velocity = Vec3::new(0.0, 0.0, -50.0);

    let collision = resolver.solver().collides(&wall, &origin, &velocity).unwrap();
    assert_eq!(collision.kind, ContactKind::Face);
    assert_relative_eq!(collision.t, 0.18, epsilon = 1e-5);

    let resolved = resolver.collide_with_world(&origin, &velocity, &[wall]);
    assert_abs_diff_eq!(resolved.norm(), 0.0, epsilon = 1e-5);
}

#[test]
fn test_walls_out_of_reach_are_ignored() {
    let resolver = MotionResolver::default();
    let origin = Vec3::new(-3.0, 4.0, 0.0);
    let velocity = Vec3::new(-1.0, 0.0, 1.0);

    let resolution = resolver.resolve(&origin, &velocity, &[floor(), east_wall()]).unwrap();
    assert_eq!(resolution.velocity, velocity);
    assert_eq!(resolution.contacts, 0);
}

#[test]
fn test_repeated_ticks_never_cross_floor() {
    let resolver = MotionResolver::default();
    let walls = [floor(), east_wall()];
    let mut position = Vec3::new(0.0, 3.0, 0.0);
    let dt = 1.0 / 60.0;

    for _ in 0..600 {
        let step = Vec3::new(2.0, -3.0, 0.25) * dt;
        position += resolver.collide_with_world(&position, &step, &walls);
        assert!(position.y >= 1.0 - 1e-3, "sphere sank into the floor at {position:?}");
        assert!(position.x <= 4.0 + 1e-3, "sphere pushed into the wall at {position:?}");
    }

    // Settled in the corner, sliding along z only
    assert_abs_diff_eq!(position.y, 1.0, epsilon = 0.1);
    assert_abs_diff_eq!(position.x, 4.0, epsilon = 0.1);
    assert_relative_eq!(position.z, 2.5, epsilon = 1e-3);
}
