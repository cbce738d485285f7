//! The quadrilateral a symbol occupies, in image pixels

use crate::point::ResultPoint;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BoundingBox {
    image_width: u32,
    image_height: u32,
    top_left: ResultPoint,
    bottom_left: ResultPoint,
    top_right: ResultPoint,
    bottom_right: ResultPoint,
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

impl BoundingBox {
    /// Build a box from whichever side was detected. A missing side is
    /// replaced by the matching image edge; both sides missing is
    /// [`Error::NotFound`].
    pub(crate) fn new(
        image_width: u32,
        image_height: u32,
        top_left: Option<ResultPoint>,
        bottom_left: Option<ResultPoint>,
        top_right: Option<ResultPoint>,
        bottom_right: Option<ResultPoint>,
    ) -> Result<Self> {
        let (top_left, bottom_left, top_right, bottom_right) =
            match (top_left.zip(bottom_left), top_right.zip(bottom_right)) {
                (None, None) => return Err(Error::NotFound),
                (None, Some((top_right, bottom_right))) => (
                    ResultPoint::new(0.0, top_right.y()),
                    ResultPoint::new(0.0, bottom_right.y()),
                    top_right,
                    bottom_right,
                ),
                (Some((top_left, bottom_left)), None) => {
                    let right = image_width as f32 - 1.0;
                    (
                        top_left,
                        bottom_left,
                        ResultPoint::new(right, top_left.y()),
                        ResultPoint::new(right, bottom_left.y()),
                    )
                }
                (Some((top_left, bottom_left)), Some((top_right, bottom_right))) => {
                    (top_left, bottom_left, top_right, bottom_right)
                }
            };
        Ok(Self {
            image_width,
            image_height,
            top_left,
            bottom_left,
            top_right,
            bottom_right,
            min_x: top_left.x().min(bottom_left.x()) as i32,
            max_x: top_right.x().max(bottom_right.x()) as i32,
            min_y: top_left.y().min(top_right.y()) as i32,
            max_y: bottom_left.y().max(bottom_right.y()) as i32,
        })
    }

    /// Left edge of `left`, right edge of `right`
    pub(crate) fn merge(left: Option<BoundingBox>, right: Option<BoundingBox>) -> Option<BoundingBox> {
        match (left, right) {
            (None, right) => right,
            (left, None) => left,
            (Some(left), Some(right)) => Some(Self {
                top_right: right.top_right,
                bottom_right: right.bottom_right,
                min_x: left.top_left.x().min(left.bottom_left.x()) as i32,
                max_x: right.top_right.x().max(right.bottom_right.x()) as i32,
                min_y: left.top_left.y().min(right.top_right.y()) as i32,
                max_y: left.bottom_left.y().max(right.bottom_right.y()) as i32,
                ..left
            }),
        }
    }

    /// Grow one side of the box by rows the row indicator column says are
    /// missing above and below what was sampled. Clamped to the image.
    pub(crate) fn add_missing_rows(
        &self,
        missing_start_rows: i32,
        missing_end_rows: i32,
        is_left: bool,
    ) -> Result<BoundingBox> {
        let mut top_left = self.top_left;
        let mut bottom_left = self.bottom_left;
        let mut top_right = self.top_right;
        let mut bottom_right = self.bottom_right;

        if missing_start_rows > 0 {
            let top = if is_left { self.top_left } else { self.top_right };
            let new_min_y = (top.y() as i32 - missing_start_rows).max(0);
            let new_top = ResultPoint::new(top.x(), new_min_y as f32);
            if is_left {
                top_left = new_top;
            } else {
                top_right = new_top;
            }
        }

        if missing_end_rows > 0 {
            let bottom = if is_left { self.bottom_left } else { self.bottom_right };
            let new_max_y =
                (bottom.y() as i32 + missing_end_rows).min(self.image_height as i32 - 1);
            let new_bottom = ResultPoint::new(bottom.x(), new_max_y as f32);
            if is_left {
                bottom_left = new_bottom;
            } else {
                bottom_right = new_bottom;
            }
        }

        BoundingBox::new(
            self.image_width,
            self.image_height,
            Some(top_left),
            Some(bottom_left),
            Some(top_right),
            Some(bottom_right),
        )
    }

    pub(crate) fn min_x(&self) -> i32 {
        self.min_x
    }

    pub(crate) fn max_x(&self) -> i32 {
        self.max_x
    }

    pub(crate) fn min_y(&self) -> i32 {
        self.min_y
    }

    pub(crate) fn max_y(&self) -> i32 {
        self.max_y
    }

    pub(crate) fn top_left(&self) -> ResultPoint {
        self.top_left
    }

    pub(crate) fn bottom_left(&self) -> ResultPoint {
        self.bottom_left
    }

    pub(crate) fn top_right(&self) -> ResultPoint {
        self.top_right
    }

    pub(crate) fn bottom_right(&self) -> ResultPoint {
        self.bottom_right
    }
}
