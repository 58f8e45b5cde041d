//! Line drawing collaborator
//!
//! The engine never talks to a graphics API directly. It draws through a
//! [`LinePrimitive`]: color and transform are set once outside the edge
//! loop, then every edge is a `set_endpoints` followed by `draw`.

use hcube_math::Mat4;

/// A line-segment drawer
///
/// Calls are synchronous and ordered; implementations need not be reentrant.
pub trait LinePrimitive {
    /// Set the RGB color used for subsequent segments
    fn set_color(&mut self, rgb: [f32; 3]);

    /// Set the projection * view * model matrix applied to segments
    fn set_transform(&mut self, mvp: Mat4);

    /// Set both endpoints of the next segment
    fn set_endpoints(&mut self, start: [f32; 3], end: [f32; 3]);

    /// Draw the segment given by the last `set_endpoints`
    fn draw(&mut self);

    /// Free any resources held by the primitive
    fn release(&mut self);
}

/// A segment captured by [`SegmentRecorder`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedSegment {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub color: [f32; 3],
}

/// CPU-only [`LinePrimitive`] that records what it is asked to draw
///
/// Used for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct SegmentRecorder {
    color: [f32; 3],
    transform: Option<Mat4>,
    endpoints: Option<([f32; 3], [f32; 3])>,
    segments: Vec<RecordedSegment>,
    released: bool,
}

impl SegmentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segments drawn so far, in draw order
    pub fn segments(&self) -> &[RecordedSegment] {
        &self.segments
    }

    /// Last transform set, if any
    pub fn transform(&self) -> Option<Mat4> {
        self.transform
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Forget recorded segments, keeping color and transform
    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl LinePrimitive for SegmentRecorder {
    fn set_color(&mut self, rgb: [f32; 3]) {
        self.color = rgb;
    }

    fn set_transform(&mut self, mvp: Mat4) {
        self.transform = Some(mvp);
    }

    fn set_endpoints(&mut self, start: [f32; 3], end: [f32; 3]) {
        self.endpoints = Some((start, end));
    }

    fn draw(&mut self) {
        // Drawing without endpoints is a no-op, matching an empty vertex buffer
        if let Some((start, end)) = self.endpoints {
            self.segments.push(RecordedSegment {
                start,
                end,
                color: self.color,
            });
        }
    }

    fn release(&mut self) {
        self.segments = Vec::new();
        self.endpoints = None;
        self.released = true;
    }
}
