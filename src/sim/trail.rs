//! Trail sampling for body paths
//!
//! Each body keeps a breadcrumb history of committed positions. Sampling is
//! distance-gated so a resting body does not grow its trail. The renderer
//! collaborator turns samples into dashed strokes via [`Trail::dash_segments`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TRAIL_MIN_SPACING;

/// A single recorded trail sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// Simulation clock when the sample was taken
    pub time: f64,
}

/// Position history of one body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trail {
    points: Vec<TrailPoint>,
}

impl Trail {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Record a sample unless the body has moved less than
    /// `TRAIL_MIN_SPACING` since the previous one
    pub fn record(&mut self, time: f64, pos: Vec2) {
        let spaced = self
            .points
            .last()
            .is_none_or(|last| (pos - last.pos).length() > TRAIL_MIN_SPACING);
        if spaced {
            self.points.push(TrailPoint { pos, time });
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sample pairs that fall inside the drawn fraction of each time slice.
    ///
    /// `frequency` slices the clock into windows of `1/frequency` seconds; a
    /// segment is kept when it ends within the leading `line_width` fraction
    /// of its window. That selection is what gives trails their dashed look.
    pub fn dash_segments(&self, frequency: f32, line_width: f32) -> Vec<(Vec2, Vec2)> {
        let mut segments = Vec::new();
        if frequency <= 0.0 {
            return segments;
        }
        let Some(first) = self.points.first() else {
            return segments;
        };

        let slice = 1.0 / frequency as f64;
        let mut window_start = first.time;
        for pair in self.points.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            while next.time - window_start > slice {
                window_start += slice;
            }
            if next.time - window_start < slice * line_width as f64 {
                segments.push((prev.pos, next.pos));
            }
        }
        segments
    }
}
