//! Geometric primitives for contact tracking: `Point` and point-set math.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle in radians of the vector from this point to `other`.
    ///
    /// Uses the two-argument arctangent, so the result is well-defined in
    /// all four quadrants; a zero-length vector yields 0.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Component-wise average of this point and `other`.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Mean distance from this point to each point in `points`.
    ///
    /// Returns `None` for an empty slice; there is no meaningful average
    /// over zero distances.
    #[must_use]
    pub fn average_distance(&self, points: &[Self]) -> Option<f32> {
        if points.is_empty() {
            return None;
        }
        let total: f32 = points.iter().map(|p| self.distance(p)).sum();
        Some(total / points.len() as f32)
    }

    /// Arithmetic mean of a point set, or `None` when the set is empty.
    #[must_use]
    pub fn centroid(points: &[Self]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f32;
        let sum = points
            .iter()
            .fold(Self::ORIGIN, |acc, p| Self::new(acc.x + p.x, acc.y + p.y));
        Some(Self::new(sum.x / n, sum.y / n))
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
