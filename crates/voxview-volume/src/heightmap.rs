/// Column heights over an `x_size * z_size` patch, x fastest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heightmap {
    x_size: usize,
    z_size: usize,
    heights: Vec<u8>,
}

impl Heightmap {
    pub fn new(x_size: usize, z_size: usize) -> Self {
        Self {
            x_size,
            z_size,
            heights: vec![0; x_size * z_size],
        }
    }

    #[inline]
    pub fn x_size(&self) -> usize {
        self.x_size
    }

    #[inline]
    pub fn z_size(&self) -> usize {
        self.z_size
    }

    #[inline]
    fn idx(&self, x: usize, z: usize) -> usize {
        assert!(
            x < self.x_size && z < self.z_size,
            "heightmap index ({}, {}) out of bounds {}x{}",
            x,
            z,
            self.x_size,
            self.z_size
        );
        z * self.x_size + x
    }

    #[inline]
    pub fn at(&self, x: usize, z: usize) -> u8 {
        self.heights[self.idx(x, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, z: usize, h: u8) {
        let i = self.idx(x, z);
        self.heights[i] = h;
    }

    pub fn max_height(&self) -> Option<u8> {
        self.heights.iter().copied().max()
    }
}
