//! Fixtures shared by the unit tests

use crate::pdf417::{row_indicator_value, BoundingBox, Codeword, RowIndicator};
use crate::point::ResultPoint;

/// Width of every codeword built here, in pixels
const CODEWORD_WIDTH: i32 = 17;

/// Cluster bucket of codewords in symbol row `row`
fn row_bucket(row: u32) -> u32 {
    (row % 3) * 3
}

/// The row indicator codeword a writer puts on `side` of `row`
pub(crate) fn indicator_codeword(
    side: RowIndicator,
    row: u32,
    rows: u32,
    columns: u32,
    ec_level: u32,
) -> Codeword {
    let value = row_indicator_value(side, row, rows, columns, ec_level);
    Codeword::new(0, CODEWORD_WIDTH, row_bucket(row), value)
}

/// A data codeword read from symbol row `row`
pub(crate) fn data_codeword(row: u32, value: u32) -> Codeword {
    Codeword::new(0, CODEWORD_WIDTH, row_bucket(row), value)
}

/// A box 200 pixels wide covering image rows `0..height`
pub(crate) fn test_bounding_box(height: i32) -> BoundingBox {
    let bottom = (height - 1) as f32;
    BoundingBox::new(
        200,
        height as u32,
        Some(ResultPoint::new(0.0, 0.0)),
        Some(ResultPoint::new(0.0, bottom)),
        Some(ResultPoint::new(199.0, 0.0)),
        Some(ResultPoint::new(199.0, bottom)),
    )
    .unwrap()
}
