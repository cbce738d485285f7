//! One column of sampled codewords, indexed by image row

use super::bounding_box::BoundingBox;
use super::codeword::Codeword;

const MAX_NEARBY_DISTANCE: i32 = 5;

/// Which edge of the symbol a row indicator column sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowIndicator {
    Left,
    Right,
}

/// Codewords found in one symbol column.
///
/// Slot `i` holds the codeword sampled on image row `min_y + i` of the
/// column's bounding box, if any. Row indicator columns carry a
/// [`RowIndicator`] tag and get the extra operations in
/// [`super::row_indicator`].
#[derive(Debug, Clone)]
pub(crate) struct DetectionResultColumn {
    bounding_box: BoundingBox,
    codewords: Vec<Option<Codeword>>,
    row_indicator: Option<RowIndicator>,
}

impl DetectionResultColumn {
    pub(crate) fn new(bounding_box: &BoundingBox, row_indicator: Option<RowIndicator>) -> Self {
        let rows = (bounding_box.max_y() - bounding_box.min_y() + 1).max(0) as usize;
        Self {
            bounding_box: bounding_box.clone(),
            codewords: vec![None; rows],
            row_indicator,
        }
    }

    pub(crate) fn row_indicator(&self) -> Option<RowIndicator> {
        self.row_indicator
    }

    pub(crate) fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    pub(crate) fn image_row_to_codeword_index(&self, image_row: i32) -> i32 {
        image_row - self.bounding_box.min_y()
    }

    pub(crate) fn set_codeword(&mut self, image_row: i32, codeword: Codeword) {
        let index = self.image_row_to_codeword_index(image_row);
        if let Some(slot) = usize::try_from(index)
            .ok()
            .and_then(|index| self.codewords.get_mut(index))
        {
            *slot = Some(codeword);
        }
    }

    pub(crate) fn codeword(&self, image_row: i32) -> Option<&Codeword> {
        self.slot(self.image_row_to_codeword_index(image_row))
    }

    /// The codeword on `image_row`, or failing that the closest one within
    /// a few rows, looking above before below at each distance.
    pub(crate) fn codeword_nearby(&self, image_row: i32) -> Option<&Codeword> {
        if let Some(codeword) = self.codeword(image_row) {
            return Some(codeword);
        }
        let index = self.image_row_to_codeword_index(image_row);
        (1..MAX_NEARBY_DISTANCE)
            .find_map(|distance| self.slot(index - distance).or_else(|| self.slot(index + distance)))
    }

    fn slot(&self, index: i32) -> Option<&Codeword> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.codewords.get(index))
            .and_then(Option::as_ref)
    }

    pub(crate) fn codewords(&self) -> &[Option<Codeword>] {
        &self.codewords
    }

    pub(crate) fn codewords_mut(&mut self) -> &mut [Option<Codeword>] {
        &mut self.codewords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::ResultPoint;

    fn column() -> DetectionResultColumn {
        let bbox = BoundingBox::new(
            200,
            200,
            Some(ResultPoint::new(10.0, 20.0)),
            Some(ResultPoint::new(10.0, 49.0)),
            Some(ResultPoint::new(150.0, 20.0)),
            Some(ResultPoint::new(150.0, 49.0)),
        )
        .unwrap();
        DetectionResultColumn::new(&bbox, None)
    }

    #[test]
    fn test_slots_follow_image_rows() {
        let mut column = column();
        assert_eq!(column.codewords().len(), 30);
        column.set_codeword(25, Codeword::new(10, 27, 0, 42));
        assert_eq!(column.codeword(25).map(Codeword::value), Some(42));
        assert!(column.codeword(24).is_none());
        assert_eq!(column.image_row_to_codeword_index(25), 5);
        // outside the box
        column.set_codeword(5, Codeword::new(10, 27, 0, 1));
        assert!(column.codeword(5).is_none());
    }

    #[test]
    fn test_codeword_nearby_prefers_rows_above() {
        let mut column = column();
        column.set_codeword(28, Codeword::new(10, 27, 0, 1));
        column.set_codeword(32, Codeword::new(10, 27, 0, 2));
        assert_eq!(column.codeword_nearby(30).map(Codeword::value), Some(1));
        assert_eq!(column.codeword_nearby(31).map(Codeword::value), Some(2));
        // more than four rows away
        assert!(column.codeword_nearby(40).is_none());
    }
}
