//! Dense voxel grids: cell state, bordered volumes and column heightmaps.
#![forbid(unsafe_code)]

mod heightmap;

pub use heightmap::Heightmap;

use voxview_geom::IVec3;

/// Two-state cell of the world grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Voxel {
    #[default]
    Empty,
    Solid,
}

impl Voxel {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Voxel::Empty)
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, Voxel::Solid)
    }
}

/// Dense 3D grid, x fastest, then y, then z.
///
/// Dimensions are fixed at construction. Indexing outside `[0, size)` on any
/// axis is a caller bug and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Volume<T> {
    sx: usize,
    sy: usize,
    sz: usize,
    cells: Vec<T>,
}

impl<T: Clone> Volume<T> {
    pub fn new(sx: usize, sy: usize, sz: usize, init: T) -> Self {
        Volume {
            sx,
            sy,
            sz,
            cells: vec![init; sx * sy * sz],
        }
    }

    /// Builds a volume from row-major cells; the length must match the dimensions.
    pub fn from_cells(sx: usize, sy: usize, sz: usize, cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            sx * sy * sz,
            "cell count does not match {}x{}x{}",
            sx,
            sy,
            sz
        );
        Volume { sx, sy, sz, cells }
    }
}

impl<T> Volume<T> {
    #[inline]
    pub fn size_x(&self) -> usize {
        self.sx
    }

    #[inline]
    pub fn size_y(&self) -> usize {
        self.sy
    }

    #[inline]
    pub fn size_z(&self) -> usize {
        self.sz
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        assert!(
            x < self.sx && y < self.sy && z < self.sz,
            "volume index ({}, {}, {}) out of bounds {}x{}x{}",
            x,
            y,
            z,
            self.sx,
            self.sy,
            self.sz
        );
        (z * self.sy + y) * self.sx + x
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize, z: usize) -> &T {
        let i = self.idx(x, y, z);
        &self.cells[i]
    }

    #[inline]
    pub fn at_mut(&mut self, x: usize, y: usize, z: usize) -> &mut T {
        let i = self.idx(x, y, z);
        &mut self.cells[i]
    }

    /// Lattice-coordinate access; negative components are out of bounds.
    #[inline]
    pub fn at_ivec(&self, p: IVec3) -> &T {
        assert!(
            p.x >= 0 && p.y >= 0 && p.z >= 0,
            "negative volume index {:?}",
            p
        );
        self.at(p.x as usize, p.y as usize, p.z as usize)
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Visits every cell index at least `b*` away from each face, z outermost.
    pub fn for_each_in_border<F>(&self, bx: usize, by: usize, bz: usize, mut f: F)
    where
        F: FnMut(usize, usize, usize),
    {
        for z in bz..self.sz.saturating_sub(bz) {
            for y in by..self.sy.saturating_sub(by) {
                for x in bx..self.sx.saturating_sub(bx) {
                    f(x, y, z);
                }
            }
        }
    }

    /// Visits every lattice corner point in `[b, size - b]` on each axis.
    ///
    /// Corner `(x, y, z)` is shared by the cells `(x-1..=x, y-1..=y, z-1..=z)`.
    pub fn for_each_vertex_in_border<F>(&self, bx: usize, by: usize, bz: usize, mut f: F)
    where
        F: FnMut(usize, usize, usize),
    {
        if self.sx < 2 * bx || self.sy < 2 * by || self.sz < 2 * bz {
            return;
        }
        for z in bz..=self.sz - bz {
            for y in by..=self.sy - by {
                for x in bx..=self.sx - bx {
                    f(x, y, z);
                }
            }
        }
    }
}

impl Volume<Voxel> {
    #[inline]
    pub fn has_solid(&self) -> bool {
        self.cells.iter().any(|v| v.is_solid())
    }

    #[inline]
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|v| v.is_solid()).count()
    }
}
