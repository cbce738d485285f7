//! Decompaction of the corrected codeword stream
//!
//! `codewords[0]` is the symbol length descriptor: the number of data
//! codewords including itself. Everything after it is interpreted as a
//! sequence of compaction modes, starting in text compaction.

use super::result_metadata::ResultMetadata;
use crate::{Error, Result};

const TEXT_COMPACTION_MODE_LATCH: u32 = 900;
const BYTE_COMPACTION_MODE_LATCH: u32 = 901;
const NUMERIC_COMPACTION_MODE_LATCH: u32 = 902;
const BYTE_COMPACTION_MODE_LATCH_6: u32 = 924;
const BEGIN_MACRO_PDF417_CONTROL_BLOCK: u32 = 928;
const BEGIN_MACRO_PDF417_OPTIONAL_FIELD: u32 = 923;
const MACRO_PDF417_TERMINATOR: u32 = 922;
const MODE_SHIFT_TO_BYTE_COMPACTION_MODE: u32 = 913;

const MAX_NUMERIC_CODEWORDS: usize = 15;
const NUMBER_OF_SEQUENCE_CODEWORDS: usize = 2;

// Text compaction sub-mode switches
const PL: u32 = 25;
const LL: u32 = 27;
const AS: u32 = 27;
const ML: u32 = 28;
const AL: u32 = 28;
const PS: u32 = 29;
const PAL: u32 = 29;

const PUNCT_CHARS: &[u8; 29] = b";<>@[\\]_`~!\r\t,:\n-.$/\"|*()?{}'";
const MIXED_CHARS: &[u8; 25] = b"0123456789&\r\t,:#-.$/+%*=^";

/// Codewords that end a byte, numeric or text run
const fn is_mode_switch(code: u32) -> bool {
    matches!(
        code,
        TEXT_COMPACTION_MODE_LATCH
            | BYTE_COMPACTION_MODE_LATCH
            | NUMERIC_COMPACTION_MODE_LATCH
            | BYTE_COMPACTION_MODE_LATCH_6
            | BEGIN_MACRO_PDF417_CONTROL_BLOCK
            | BEGIN_MACRO_PDF417_OPTIONAL_FIELD
            | MACRO_PDF417_TERMINATOR
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Alpha,
    Lower,
    Mixed,
    Punct,
    AlphaShift,
    PunctShift,
}

/// Payload of one symbol
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DecoderResult {
    pub(crate) data: Vec<u8>,
    pub(crate) ec_level: u32,
    pub(crate) metadata: Option<ResultMetadata>,
    pub(crate) errors_corrected: usize,
    pub(crate) erasures: usize,
}

/// Decode a corrected data codeword stream, SLD first.
pub(crate) fn decode(codewords: &[u32], ec_level: u32) -> Result<DecoderResult> {
    let Some(&length) = codewords.first() else {
        return Err(Error::Format("empty codeword stream"));
    };
    let parser = Parser {
        codewords,
        end: (length as usize).min(codewords.len()),
    };

    let mut result = Vec::new();
    let mut metadata = None;
    let mut code_index = parser.text_compaction(1, &mut result)?;
    while code_index < parser.end {
        let code = codewords[code_index];
        code_index += 1;
        code_index = match code {
            TEXT_COMPACTION_MODE_LATCH => parser.text_compaction(code_index, &mut result)?,
            BYTE_COMPACTION_MODE_LATCH | BYTE_COMPACTION_MODE_LATCH_6 => {
                parser.byte_compaction(code, code_index, &mut result)?
            }
            MODE_SHIFT_TO_BYTE_COMPACTION_MODE => {
                let byte = parser.code(code_index).ok_or(Error::Format("byte shift at end of stream"))?;
                result.push(byte as u8);
                code_index + 1
            }
            NUMERIC_COMPACTION_MODE_LATCH => parser.numeric_compaction(code_index, &mut result)?,
            BEGIN_MACRO_PDF417_CONTROL_BLOCK => {
                let (next, block) = parser.decode_macro_block(code_index)?;
                metadata = Some(block);
                next
            }
            BEGIN_MACRO_PDF417_OPTIONAL_FIELD => {
                return Err(Error::Format("optional field outside a macro block"));
            }
            // A terminator without a control block carries nothing
            MACRO_PDF417_TERMINATOR => code_index,
            _ => parser.text_compaction(code_index - 1, &mut result)?,
        };
    }

    if result.is_empty() {
        return Err(Error::Format("no data decoded"));
    }
    Ok(DecoderResult {
        data: result,
        ec_level,
        metadata,
        errors_corrected: 0,
        erasures: 0,
    })
}

struct Parser<'a> {
    codewords: &'a [u32],
    /// One past the last data codeword
    end: usize,
}

impl Parser<'_> {
    fn code(&self, index: usize) -> Option<u32> {
        (index < self.end).then(|| self.codewords[index])
    }

    fn decode_macro_block(&self, mut code_index: usize) -> Result<(usize, ResultMetadata)> {
        if code_index + NUMBER_OF_SEQUENCE_CODEWORDS > self.end {
            return Err(Error::Format("truncated macro control block"));
        }
        let segment = &self.codewords[code_index..code_index + NUMBER_OF_SEQUENCE_CODEWORDS];
        let segment_index = decode_base900_to_base10(segment)?;
        code_index += NUMBER_OF_SEQUENCE_CODEWORDS;

        let mut metadata = ResultMetadata {
            segment_index: if segment_index.is_empty() {
                0
            } else {
                segment_index
                    .parse()
                    .map_err(|_| Error::Format("segment index out of range"))?
            },
            ..ResultMetadata::default()
        };

        let mut file_id = Vec::new();
        code_index = self.text_compaction(code_index, &mut file_id)?;
        metadata.file_id = String::from_utf8_lossy(&file_id).into_owned();

        match self.code(code_index) {
            Some(BEGIN_MACRO_PDF417_OPTIONAL_FIELD) => {
                code_index += 1;
                let mut optional_data = Vec::new();
                while let Some(code) = self.code(code_index) {
                    code_index += 1;
                    match code {
                        code if code < TEXT_COMPACTION_MODE_LATCH => optional_data.push(code),
                        MACRO_PDF417_TERMINATOR => {
                            metadata.last_segment = true;
                            break;
                        }
                        _ => return Err(Error::Format("unexpected codeword in optional field")),
                    }
                }
                metadata.optional_data = Some(optional_data);
            }
            Some(MACRO_PDF417_TERMINATOR) => {
                metadata.last_segment = true;
                code_index += 1;
            }
            _ => {}
        }
        Ok((code_index, metadata))
    }

    /// Collect text compaction values until a mode switch, then decode them.
    ///
    /// Every codeword below 900 holds two sub-mode values. A 913 takes the
    /// following codeword as one raw byte.
    fn text_compaction(&self, mut code_index: usize, result: &mut Vec<u8>) -> Result<usize> {
        let capacity = self.end.saturating_sub(code_index) * 2;
        let mut text_data = Vec::with_capacity(capacity);
        let mut byte_data = Vec::with_capacity(capacity);
        while let Some(code) = self.code(code_index) {
            code_index += 1;
            match code {
                code if code < TEXT_COMPACTION_MODE_LATCH => {
                    text_data.extend([code / 30, code % 30]);
                    byte_data.extend([0, 0]);
                }
                TEXT_COMPACTION_MODE_LATCH => {
                    text_data.push(TEXT_COMPACTION_MODE_LATCH);
                    byte_data.push(0);
                }
                MODE_SHIFT_TO_BYTE_COMPACTION_MODE => {
                    let byte = self
                        .code(code_index)
                        .ok_or(Error::Format("byte shift at end of stream"))?;
                    code_index += 1;
                    text_data.push(MODE_SHIFT_TO_BYTE_COMPACTION_MODE);
                    byte_data.push(byte);
                }
                code if is_mode_switch(code) => {
                    code_index -= 1;
                    break;
                }
                _ => {}
            }
        }
        decode_text_compaction(&text_data, &byte_data, result);
        Ok(code_index)
    }

    /// 901 packs five codewords into six bytes when more byte data follows
    /// the group; a trailing partial group is stored one byte per codeword.
    /// 924 only ever holds complete groups, so a short tail is skipped.
    fn byte_compaction(&self, mode: u32, mut code_index: usize, result: &mut Vec<u8>) -> Result<usize> {
        let is_data = |index: usize| self.code(index).is_some_and(|code| code < TEXT_COMPACTION_MODE_LATCH);
        while is_data(code_index) {
            let mut value: u64 = 0;
            let mut count = 0;
            while count < 5 && is_data(code_index) {
                value = 900 * value + u64::from(self.codewords[code_index]);
                code_index += 1;
                count += 1;
            }
            if count == 5 && (mode == BYTE_COMPACTION_MODE_LATCH_6 || is_data(code_index)) {
                result.extend((0..6).rev().map(|i| (value >> (8 * i)) as u8));
            } else if mode == BYTE_COMPACTION_MODE_LATCH_6 {
                log::debug!("dropping {count} codewords of an incomplete byte group");
            } else {
                code_index -= count;
                while is_data(code_index) {
                    result.push(self.codewords[code_index] as u8);
                    code_index += 1;
                }
            }
        }
        Ok(code_index)
    }

    fn numeric_compaction(&self, mut code_index: usize, result: &mut Vec<u8>) -> Result<usize> {
        let mut numeric_codewords = Vec::with_capacity(MAX_NUMERIC_CODEWORDS);
        while let Some(code) = self.code(code_index) {
            code_index += 1;
            let mut end = code_index == self.end;
            if code < TEXT_COMPACTION_MODE_LATCH {
                numeric_codewords.push(code);
            } else if code != NUMERIC_COMPACTION_MODE_LATCH && is_mode_switch(code) {
                code_index -= 1;
                end = true;
            }
            if (numeric_codewords.len() == MAX_NUMERIC_CODEWORDS
                || code == NUMERIC_COMPACTION_MODE_LATCH
                || end)
                && !numeric_codewords.is_empty()
            {
                result.extend(decode_base900_to_base10(&numeric_codewords)?.bytes());
                numeric_codewords.clear();
            }
            if end {
                break;
            }
        }
        Ok(code_index)
    }
}

fn decode_text_compaction(text_data: &[u32], byte_data: &[u32], result: &mut Vec<u8>) {
    let mut sub_mode = Mode::Alpha;
    let mut prior_to_shift_mode = Mode::Alpha;
    for (&value, &byte) in text_data.iter().zip(byte_data) {
        // A shifted byte is emitted in every sub-mode, the shift states
        // included, and it uses up a pending AS or PS.
        if value == MODE_SHIFT_TO_BYTE_COMPACTION_MODE {
            result.push(byte as u8);
            if matches!(sub_mode, Mode::AlphaShift | Mode::PunctShift) {
                sub_mode = prior_to_shift_mode;
            }
            continue;
        }
        if value == TEXT_COMPACTION_MODE_LATCH {
            sub_mode = Mode::Alpha;
            continue;
        }

        let mut ch = None;
        match sub_mode {
            Mode::Alpha | Mode::AlphaShift if value < 26 => ch = Some(b'A' + value as u8),
            Mode::Lower if value < 26 => ch = Some(b'a' + value as u8),
            Mode::Alpha | Mode::Lower | Mode::AlphaShift if value == 26 => ch = Some(b' '),
            Mode::Mixed if value < PL => ch = Some(MIXED_CHARS[value as usize]),
            Mode::Mixed if value == 26 => ch = Some(b' '),
            Mode::Punct | Mode::PunctShift if value < PAL => ch = Some(PUNCT_CHARS[value as usize]),
            _ => {}
        }

        match sub_mode {
            Mode::AlphaShift => sub_mode = prior_to_shift_mode,
            Mode::PunctShift => {
                sub_mode = if value == PAL { Mode::Alpha } else { prior_to_shift_mode };
            }
            _ if ch.is_some() => {}
            Mode::Alpha => match value {
                LL => sub_mode = Mode::Lower,
                ML => sub_mode = Mode::Mixed,
                PS => {
                    prior_to_shift_mode = sub_mode;
                    sub_mode = Mode::PunctShift;
                }
                _ => {}
            },
            Mode::Lower => match value {
                AS => {
                    prior_to_shift_mode = sub_mode;
                    sub_mode = Mode::AlphaShift;
                }
                ML => sub_mode = Mode::Mixed,
                PS => {
                    prior_to_shift_mode = sub_mode;
                    sub_mode = Mode::PunctShift;
                }
                _ => {}
            },
            Mode::Mixed => match value {
                PL => sub_mode = Mode::Punct,
                LL => sub_mode = Mode::Lower,
                AL => sub_mode = Mode::Alpha,
                PS => {
                    prior_to_shift_mode = sub_mode;
                    sub_mode = Mode::PunctShift;
                }
                _ => {}
            },
            Mode::Punct => {
                if value == PAL {
                    sub_mode = Mode::Alpha;
                }
            }
        }

        if let Some(ch) = ch {
            result.push(ch);
        }
    }
}

/// Interpret base-900 digits as one number and return its decimal digits
/// after the leading `1` that numeric compaction always prepends.
pub(crate) fn decode_base900_to_base10(codewords: &[u32]) -> Result<String> {
    // little-endian decimal digits
    let mut digits: Vec<u32> = Vec::new();
    for &code in codewords {
        let mut carry = code;
        for digit in digits.iter_mut() {
            let value = *digit * 900 + carry;
            *digit = value % 10;
            carry = value / 10;
        }
        while carry > 0 {
            digits.push(carry % 10);
            carry /= 10;
        }
    }
    let decimal: String = digits
        .iter()
        .rev()
        .map(|&digit| char::from(b'0' + digit as u8))
        .collect();
    match decimal.strip_prefix('1') {
        Some(rest) => Ok(rest.to_owned()),
        None => Err(Error::Format("numeric value without leading 1")),
    }
}
