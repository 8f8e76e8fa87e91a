use proptest::prelude::*;
use voxview_geom::{IVec3, Mat4, Vec3};

fn coord() -> impl Strategy<Value = i32> {
    -1_000_000i32..=1_000_000
}

fn arb_ivec3() -> impl Strategy<Value = IVec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| IVec3::new(x, y, z))
}

proptest! {
    // Integer lattice points floor back onto themselves
    #[test]
    fn floor_of_lattice_point_is_identity(p in arb_ivec3()) {
        prop_assert_eq!(Vec3::from(p).floor(), p);
    }

    // Any point inside a unit cell floors to that cell's min corner
    #[test]
    fn floor_inside_cell(p in arb_ivec3(), fx in 0.0f32..0.9, fy in 0.0f32..0.9, fz in 0.0f32..0.9) {
        // Keep magnitudes small enough that f32 still resolves the fraction
        let p = IVec3::new(p.x % 10_000, p.y % 10_000, p.z % 10_000);
        let v = Vec3::from(p) + Vec3::new(fx, fy, fz);
        prop_assert_eq!(v.floor(), p);
    }

    // a + b - b == a on the integer lattice
    #[test]
    fn ivec3_add_sub_roundtrip(a in arb_ivec3(), b in arb_ivec3()) {
        prop_assert_eq!((a + b) - b, a);
    }

    // Translating integral points by an integral offset is exact
    #[test]
    fn translation_of_lattice_points_is_exact(p in arb_ivec3(), t in arb_ivec3()) {
        let p = IVec3::new(p.x % 4096, p.y % 4096, p.z % 4096);
        let t = IVec3::new(t.x % 4096, t.y % 4096, t.z % 4096);
        let m = Mat4::from_translation(t.into());
        prop_assert_eq!(m.transform_point(p.into()), Vec3::from(p + t));
    }
}
