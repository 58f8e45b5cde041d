//! CPU-side segment batch
//!
//! Line draws are collected here during a frame and uploaded to the GPU
//! vertex buffer in one write. The batch is sized once and never grows.

use super::types::{LineVertex, VERTICES_PER_SEGMENT};

/// Fixed-capacity list of line segments for one frame
#[derive(Clone, Debug)]
pub struct SegmentBatch {
    capacity: usize,
    vertices: Vec<LineVertex>,
    endpoints: Option<[LineVertex; VERTICES_PER_SEGMENT]>,
    dropped: usize,
    overflow_warned: bool,
}

impl SegmentBatch {
    /// Create a batch holding at most `capacity` segments
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            vertices: Vec::with_capacity(capacity * VERTICES_PER_SEGMENT),
            endpoints: None,
            dropped: 0,
            overflow_warned: false,
        }
    }

    /// Maximum number of segments per frame
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of segments recorded this frame
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_SEGMENT
    }

    /// Segments that did not fit since the last clear
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Recorded endpoints, two per segment
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn set_endpoints(&mut self, start: [f32; 3], end: [f32; 3]) {
        self.endpoints = Some([LineVertex::new(start), LineVertex::new(end)]);
    }

    /// Append the current endpoints as a segment
    ///
    /// Returns false if there were no endpoints or the batch is full.
    pub fn push(&mut self) -> bool {
        let Some(endpoints) = self.endpoints else {
            return false;
        };

        if self.segment_count() >= self.capacity {
            self.dropped += 1;
            if !self.overflow_warned {
                log::warn!(
                    "Line batch full ({} segments); dropping extra segments",
                    self.capacity
                );
                self.overflow_warned = true;
            }
            return false;
        }

        self.vertices.extend_from_slice(&endpoints);
        true
    }

    /// Start a new frame, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.dropped = 0;
    }

    /// Drop the allocation and any pending endpoints
    pub fn release(&mut self) {
        self.vertices = Vec::new();
        self.endpoints = None;
        self.capacity = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_records_segment() {
        let mut batch = SegmentBatch::with_capacity(4);
        batch.set_endpoints([0.0, 0.0, 0.0], [1.0, 2.0, 3.0]);
        assert!(batch.push());

        assert_eq!(batch.segment_count(), 1);
        assert_eq!(batch.vertices()[1].position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_push_without_endpoints() {
        let mut batch = SegmentBatch::with_capacity(4);
        assert!(!batch.push());
        assert_eq!(batch.segment_count(), 0);
    }

    #[test]
    fn test_overflow_drops_segments() {
        let mut batch = SegmentBatch::with_capacity(2);
        batch.set_endpoints([0.0; 3], [1.0; 3]);
        assert!(batch.push());
        assert!(batch.push());
        assert!(!batch.push());
        assert!(!batch.push());

        assert_eq!(batch.segment_count(), 2);
        assert_eq!(batch.dropped(), 2);
    }

    #[test]
    fn test_clear_keeps_allocation() {
        let mut batch = SegmentBatch::with_capacity(32);
        batch.set_endpoints([0.0; 3], [1.0; 3]);
        for _ in 0..32 {
            batch.push();
        }
        let ptr = batch.vertices().as_ptr();

        batch.clear();
        assert_eq!(batch.segment_count(), 0);
        assert_eq!(batch.dropped(), 0);

        batch.push();
        assert_eq!(batch.vertices().as_ptr(), ptr);
    }

    #[test]
    fn test_release() {
        let mut batch = SegmentBatch::with_capacity(8);
        batch.set_endpoints([0.0; 3], [1.0; 3]);
        batch.push();
        batch.release();

        assert_eq!(batch.capacity(), 0);
        assert_eq!(batch.segment_count(), 0);
        assert!(!batch.push());
    }
}
