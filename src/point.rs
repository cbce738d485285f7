//! Points in image space

/// A location found by the detector, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResultPoint {
    x: f32,
    y: f32,
}

impl ResultPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &ResultPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for ResultPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = ResultPoint::new(1.0, 1.0);
        let b = ResultPoint::from((4, 5));
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.x(), 4.0);
    }
}
