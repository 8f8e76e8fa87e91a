use voxview_geom::{IVec3, Vec3};

/// The six axis-aligned faces of a voxel, in emission order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Left = 0,
    Right = 1,
    Bottom = 2,
    Top = 3,
    Back = 4,
    Front = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Bottom,
        Face::Top,
        Face::Back,
        Face::Front,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Integer step from a voxel to the neighbor this face looks at.
    #[inline]
    pub const fn delta(self) -> IVec3 {
        match self {
            Face::Left => IVec3::new(-1, 0, 0),
            Face::Right => IVec3::new(1, 0, 0),
            Face::Bottom => IVec3::new(0, -1, 0),
            Face::Top => IVec3::new(0, 1, 0),
            Face::Back => IVec3::new(0, 0, -1),
            Face::Front => IVec3::new(0, 0, 1),
        }
    }

    /// Outward unit normal.
    #[inline]
    pub fn normal(self) -> Vec3 {
        Vec3::from(self.delta())
    }

    /// Two triangles covering this face of the unit cube at the origin.
    #[inline]
    pub fn corners(self) -> [IVec3; 6] {
        FACE_TABLE[self.index()]
    }
}

const fn c(x: i32, y: i32, z: i32) -> IVec3 {
    IVec3::new(x, y, z)
}

/// Unit-cube corners per face, counter-clockwise seen from outside.
pub const FACE_TABLE: [[IVec3; 6]; 6] = [
    // left
    [c(0, 0, 0), c(0, 0, 1), c(0, 1, 0), c(0, 0, 1), c(0, 1, 1), c(0, 1, 0)],
    // right
    [c(1, 0, 0), c(1, 1, 0), c(1, 0, 1), c(1, 0, 1), c(1, 1, 0), c(1, 1, 1)],
    // bottom
    [c(0, 0, 0), c(1, 0, 0), c(0, 0, 1), c(1, 0, 0), c(1, 0, 1), c(0, 0, 1)],
    // top
    [c(0, 1, 0), c(0, 1, 1), c(1, 1, 0), c(1, 1, 0), c(0, 1, 1), c(1, 1, 1)],
    // back
    [c(0, 0, 0), c(0, 1, 0), c(1, 0, 0), c(0, 1, 0), c(1, 1, 0), c(1, 0, 0)],
    // front
    [c(0, 0, 1), c(1, 0, 1), c(0, 1, 1), c(0, 1, 1), c(1, 0, 1), c(1, 1, 1)],
];
