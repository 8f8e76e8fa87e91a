use voxview_geom::Vec3;

/// Non-indexed triangle list in chunk-local space.
///
/// The three arrays run in parallel: every three consecutive vertices form
/// one triangle and vertex `i` uses `normals[i]` and `brightnesses[i]`.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub brightnesses: Vec<u8>,
}

impl MeshData {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True when the arrays agree in length and hold whole triangles.
    pub fn is_well_formed(&self) -> bool {
        let n = self.positions.len();
        n % 3 == 0 && self.normals.len() == n && self.brightnesses.len() == n
    }

    /// Pre-reserve capacity for `n_faces` voxel faces (two triangles each).
    #[inline]
    pub fn reserve_faces(&mut self, n_faces: usize) {
        self.positions.reserve(n_faces * 6);
        self.normals.reserve(n_faces * 6);
        self.brightnesses.reserve(n_faces * 6);
    }

    /// Axis-aligned bounds of all positions, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(lo, hi), p| {
            (
                Vec3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Vec3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        }))
    }
}
