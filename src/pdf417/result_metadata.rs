//! Macro PDF417 structured append information

/// Control block of a symbol that is one segment of a larger message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMetadata {
    pub(crate) segment_index: u32,
    pub(crate) file_id: String,
    pub(crate) last_segment: bool,
    pub(crate) optional_data: Option<Vec<u32>>,
}

impl ResultMetadata {
    /// Position of this symbol within the message, starting at 0
    pub fn segment_index(&self) -> u32 {
        self.segment_index
    }

    /// Identifier shared by all segments of the message
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    pub fn is_last_segment(&self) -> bool {
        self.last_segment
    }

    /// Raw codewords of the optional fields, if the control block had any
    pub fn optional_data(&self) -> Option<&[u32]> {
        self.optional_data.as_deref()
    }
}
