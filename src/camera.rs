use std::f32::consts::{PI, TAU};

use voxview_geom::Vec3;

pub const MIN_FOV: f32 = 20.0 * PI / 180.0;
pub const MAX_FOV: f32 = PI;

/// Wraps an angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

/// Free-flying camera. Angles are radians; horizontal turns about +y and
/// vertical tilts about +x, with zero looking down +z.
#[derive(Clone, Debug, PartialEq)]
pub struct FlyCamera {
    position: Vec3,
    horizontal_angle: f32,
    vertical_angle: f32,
    fov: f32,
}

impl FlyCamera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            horizontal_angle: 0.0,
            vertical_angle: 0.0,
            fov: 60f32.to_radians(),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn horizontal_angle(&self) -> f32 {
        self.horizontal_angle
    }

    #[inline]
    pub fn vertical_angle(&self) -> f32 {
        self.vertical_angle
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(MIN_FOV, MAX_FOV);
    }

    /// Sets both angles, wrapping each into `[0, 2π)`.
    pub fn look(&mut self, horizontal: f32, vertical: f32) {
        self.horizontal_angle = wrap_angle(horizontal);
        self.vertical_angle = wrap_angle(vertical);
    }

    pub fn forward(&self) -> Vec3 {
        let (sh, ch) = self.horizontal_angle.sin_cos();
        let (sv, cv) = self.vertical_angle.sin_cos();
        Vec3::new(sh * cv, -sv, ch * cv)
    }

    pub fn right(&self) -> Vec3 {
        let r = self.forward().cross(Vec3::UP);
        if r.length() > f32::EPSILON {
            r.normalized()
        } else {
            // Looking straight up or down; fall back to the heading alone
            let (sh, ch) = self.horizontal_angle.sin_cos();
            Vec3::new(-ch, 0.0, sh)
        }
    }

    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }

    pub fn move_right(&mut self, distance: f32) {
        self.position += self.right() * distance;
    }
}
