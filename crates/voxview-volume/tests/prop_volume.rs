use proptest::prelude::*;
use voxview_geom::IVec3;
use voxview_volume::{Heightmap, Volume, Voxel};

fn dim() -> impl Strategy<Value = usize> {
    1usize..=8
}

proptest! {
    // idx maps each (x,y,z) within bounds to unique in-range indices
    #[test]
    fn idx_is_unique_and_in_range(sx in dim(), sy in dim(), sz in dim()) {
        let vol = Volume::new(sx, sy, sz, Voxel::Empty);
        let expect = sx * sy * sz;
        let mut seen = vec![false; expect];
        for z in 0..sz { for y in 0..sy { for x in 0..sx {
            let i = vol.idx(x, y, z);
            prop_assert!(i < expect);
            prop_assert!(!seen[i]);
            seen[i] = true;
        }}}
        prop_assert!(seen.into_iter().all(|b| b));
    }

    // x varies fastest, then y, then z
    #[test]
    fn idx_is_x_fastest(sx in dim(), sy in dim(), sz in dim()) {
        let vol = Volume::new(sx, sy, sz, 0u32);
        for z in 0..sz { for y in 0..sy { for x in 0..sx {
            prop_assert_eq!(vol.idx(x, y, z), z * sx * sy + y * sx + x);
        }}}
    }

    // at reads from linearized storage at idx
    #[test]
    fn at_matches_linear(sx in dim(), sy in dim(), sz in dim()) {
        let cells: Vec<u32> = (0..(sx * sy * sz) as u32).collect();
        let vol = Volume::from_cells(sx, sy, sz, cells);
        for z in 0..sz { for y in 0..sy { for x in 0..sx {
            prop_assert_eq!(*vol.at(x, y, z), vol.cells()[vol.idx(x, y, z)]);
            prop_assert_eq!(*vol.at_ivec(IVec3::new(x as i32, y as i32, z as i32)), *vol.at(x, y, z));
        }}}
    }

    // Bordered iteration visits exactly the interior cells, once each
    #[test]
    fn for_each_in_border_visits_interior(sx in dim(), sy in dim(), sz in dim(), b in 0usize..=2) {
        let vol = Volume::new(sx, sy, sz, Voxel::Empty);
        let mut visited = 0usize;
        vol.for_each_in_border(b, b, b, |x, y, z| {
            assert!(x >= b && x + b < sx);
            assert!(y >= b && y + b < sy);
            assert!(z >= b && z + b < sz);
            visited += 1;
        });
        let inner = |s: usize| s.saturating_sub(2 * b);
        prop_assert_eq!(visited, inner(sx) * inner(sy) * inner(sz));
    }

    // Vertex iteration covers the (n+1)^3 corner lattice of the interior
    #[test]
    fn for_each_vertex_in_border_visits_corners(sx in 2usize..=8, sy in 2usize..=8, sz in 2usize..=8) {
        let vol = Volume::new(sx, sy, sz, Voxel::Empty);
        let mut visited = 0usize;
        vol.for_each_vertex_in_border(1, 1, 1, |x, y, z| {
            assert!((1..=sx - 1).contains(&x));
            assert!((1..=sy - 1).contains(&y));
            assert!((1..=sz - 1).contains(&z));
            visited += 1;
        });
        prop_assert_eq!(visited, (sx - 1) * (sy - 1) * (sz - 1));
    }
}

#[test]
fn at_mut_writes_through() {
    let mut vol = Volume::new(3, 4, 5, Voxel::Empty);
    *vol.at_mut(2, 3, 4) = Voxel::Solid;
    assert!(vol.at(2, 3, 4).is_solid());
    assert_eq!(vol.solid_count(), 1);
    assert!(vol.has_solid());
    assert_eq!(vol.len(), 60);
}

#[test]
#[should_panic]
fn at_out_of_range_panics() {
    let vol = Volume::new(2, 2, 2, Voxel::Empty);
    let _ = vol.at(2, 0, 0);
}

#[test]
#[should_panic]
fn from_cells_rejects_wrong_length() {
    let _ = Volume::from_cells(2, 2, 2, vec![Voxel::Empty; 7]);
}

#[test]
fn heightmap_stores_per_column() {
    let mut hm = Heightmap::new(3, 2);
    hm.set(2, 1, 17);
    hm.set(0, 0, 4);
    assert_eq!(hm.at(2, 1), 17);
    assert_eq!(hm.at(1, 1), 0);
    assert_eq!(hm.max_height(), Some(17));
}

#[test]
#[should_panic]
fn heightmap_out_of_range_panics() {
    let hm = Heightmap::new(3, 2);
    let _ = hm.at(0, 2);
}
