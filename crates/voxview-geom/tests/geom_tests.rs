use voxview_geom::{IVec3, Mat4, Vec3};

#[test]
fn vec3_constants() {
    assert_eq!(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(Vec3::UP, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn vec3_cross_of_basis() {
    let i = Vec3::new(1.0, 0.0, 0.0);
    let j = Vec3::new(0.0, 1.0, 0.0);
    let k = Vec3::new(0.0, 0.0, 1.0);
    assert_eq!(i.cross(j), k);
    assert_eq!(j.cross(k), i);
    assert_eq!(k.cross(i), j);
}

#[test]
fn vec3_normalized_zero_is_noop() {
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    let n = Vec3::new(3.0, 4.0, 0.0).normalized();
    assert!((n.length() - 1.0).abs() < 1e-6);
}

#[test]
fn vec3_step_along_direction() {
    let mut p = Vec3::new(1.0, 2.0, 3.0);
    p += Vec3::new(0.0, 0.0, 1.0) * 2.5;
    assert_eq!(p, Vec3::new(1.0, 2.0, 5.5));
    assert_eq!(p - Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 2.5));
}

#[test]
fn floor_rounds_toward_negative_infinity() {
    assert_eq!(Vec3::new(0.5, 1.0, 63.9).floor(), IVec3::new(0, 1, 63));
    assert_eq!(Vec3::new(-0.5, -1.0, -64.1).floor(), IVec3::new(-1, -1, -65));
}

#[test]
fn ivec3_arithmetic() {
    let a = IVec3::new(1, -2, 3);
    let b = IVec3::new(4, 5, -6);
    assert_eq!(a + b, IVec3::new(5, 3, -3));
    assert_eq!(a - b, IVec3::new(-3, -7, 9));
    assert_eq!(a * 2, IVec3::new(2, -4, 6));
    assert_eq!(IVec3::splat(7), IVec3::new(7, 7, 7));
    assert!(a.all_le(IVec3::new(1, -2, 3)));
    assert!(!b.all_le(a));
}

#[test]
fn ivec3_into_vec3_is_exact() {
    let v: Vec3 = IVec3::new(-64, 0, 128).into();
    assert_eq!(v, Vec3::new(-64.0, 0.0, 128.0));
}

#[test]
fn mat4_translation_moves_points() {
    let m = Mat4::from_translation(Vec3::new(64.0, 0.0, -128.0));
    assert_eq!(m.translation(), Vec3::new(64.0, 0.0, -128.0));
    assert_eq!(
        m.transform_point(Vec3::new(1.0, 2.0, 3.0)),
        Vec3::new(65.0, 2.0, -125.0)
    );
}

#[test]
fn mat4_identity_is_neutral() {
    let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(Mat4::IDENTITY * m, m);
    assert_eq!(m * Mat4::IDENTITY, m);
    assert_eq!(Mat4::default(), Mat4::IDENTITY);
}

#[test]
fn mat4_translations_compose_additively() {
    let a = Mat4::from_translation(Vec3::new(1.0, 0.0, 2.0));
    let b = Mat4::from_translation(Vec3::new(-4.0, 8.0, 0.5));
    assert_eq!((a * b).translation(), Vec3::new(-3.0, 8.0, 2.5));
}
