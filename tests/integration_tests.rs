use mass_spring::{RigidBody, Vec, Vec2, Vec3};
use approx::assert_relative_eq;

#[test]
fn constant_acceleration_matches_closed_form() {
    let x0 = Vec3::new(1.0f64, -2.0, 0.0);
    let v0 = Vec3::new(0.5, 0.25, 0.0);
    let force = Vec3::new(3.0, -1.0, 0.0);
    let mass = 2.0;
    let dt = 0.012;
    let a = force.scale(1.0 / mass);

    let mut body = RigidBody::new(x0, v0, mass);
    body.apply_force(force);
    body.integrate_linear(dt);

    let expected_v = v0 + a.scale(dt);
    let expected_x = x0 + v0.scale(dt) + a.scale(0.5 * dt * dt);
    assert_relative_eq!(body.velocity.x, expected_v.x, epsilon = 1e-12);
    assert_relative_eq!(body.velocity.y, expected_v.y, epsilon = 1e-12);
    assert_relative_eq!(body.position.x, expected_x.x, epsilon = 1e-12);
    assert_relative_eq!(body.position.y, expected_x.y, epsilon = 1e-12);
}

#[test]
fn repeated_steps_under_constant_force_are_exact_for_quadratic_motion() {
    // Second-order integration reproduces x = a t² / 2 exactly under constant force.
    let mut body: RigidBody<Vec2<f64>> = RigidBody::at_rest(Vec2::zero(), 1.0);
    let dt = 0.01;
    for _ in 0..100 {
        body.apply_force(Vec2::new(0.0, -9.81));
        body.integrate_linear(dt);
    }
    assert_relative_eq!(body.position.y, -0.5 * 9.81, epsilon = 1e-9);
    assert_relative_eq!(body.velocity.y, -9.81, epsilon = 1e-9);
}

#[test]
fn forces_do_not_leak_into_the_next_step() {
    let mut body: RigidBody<Vec3<f32>> = RigidBody::at_rest(Vec3::zero(), 1.0);
    body.apply_force(Vec3::new(10.0, 0.0, 0.0));
    body.integrate_linear(0.1);
    let v_after_push = body.velocity;
    body.integrate_linear(0.1);
    assert_eq!(body.velocity, v_after_push);
}
