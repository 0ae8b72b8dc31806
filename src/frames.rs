//! The frame sequence generator: evenly spaced rotation angles over a full
//! turn, realized lazily as rotated + resized rasters.

use image::RgbaImage;

use crate::{
    config::Direction,
    error::{RollinError, RollinResult},
    raster,
};

/// One finished frame of the animation, straight-alpha RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Angle schedule for a full 360-degree rotation split into `count` frames.
#[derive(Clone, Copy, Debug)]
pub struct FramePlan {
    count: u64,
    step_deg: f64,
}

impl FramePlan {
    pub fn new(count: u64, direction: Direction) -> RollinResult<Self> {
        if count == 0 {
            return Err(RollinError::config("frame count must be >= 1"));
        }
        Ok(Self {
            count,
            step_deg: (360.0 / count as f64) * direction.sign(),
        })
    }

    pub fn count(self) -> u64 {
        self.count
    }

    /// Angle in degrees for frame `i` (0-indexed). Frame 0 is always the
    /// identity orientation.
    pub fn angle_deg(self, i: u64) -> f64 {
        i as f64 * self.step_deg
    }
}

/// Lazy sequence of frames in playback order. Each frame is independent of
/// the others, so nothing is retained between steps beyond the source.
pub struct FrameSequence<'a> {
    src: &'a RgbaImage,
    plan: FramePlan,
    out_size: (u32, u32),
    next_index: u64,
}

impl<'a> FrameSequence<'a> {
    pub fn new(src: &'a RgbaImage, plan: FramePlan, out_size: (u32, u32)) -> Self {
        Self {
            src,
            plan,
            out_size,
            next_index: 0,
        }
    }
}

impl Iterator for FrameSequence<'_> {
    type Item = FrameRgba;

    fn next(&mut self) -> Option<FrameRgba> {
        if self.next_index >= self.plan.count() {
            return None;
        }
        let angle = self.plan.angle_deg(self.next_index);
        self.next_index += 1;

        let rotated = raster::rotate_about_center(self.src, angle);
        let (w, h) = self.out_size;
        let sized = raster::resize_to(&rotated, w, h);
        Some(FrameRgba {
            width: w,
            height: h,
            data: sized.into_raw(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.plan.count() - self.next_index) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for FrameSequence<'_> {}
