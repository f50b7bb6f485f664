//! LZW with variable-width codes and dictionary reset.
//!
//! The container is a raw MSB-first bitstream of codes. Widths start at 9
//! bits and grow to 15 as the dictionary fills; code 256 (CLEAR) resets
//! the dictionary and width, code 257 (STOP) ends the stream. User entries
//! start at code 258. A full dictionary (2^15 entries) forces a CLEAR.
//!
//! # Width lockstep
//!
//! At any point in the stream the decoder's dictionary lags the encoder's
//! by exactly one entry (the decoder learns an entry's last byte only from
//! the following code). Width changes must land on the same bit positions
//! on both sides, so the escalation checks compensate for the lag: the
//! encoder widens when its next free code strictly exceeds `2^width`, the
//! decoder when its next free code reaches `2^width`, and the encoder runs
//! the decoder's check once more before emitting the trailing STOP.

use std::collections::HashMap;

use crate::bitio::{BitReader, BitWriter};
use crate::error::{LzwError, Result};
use crate::traits::{Compressor, Decompressor};

const INITIAL_CODE_WIDTH: u32 = 9;
const MAX_CODE_WIDTH: u32 = 15;
const MAX_DICTIONARY_SIZE: u16 = 1 << MAX_CODE_WIDTH;
const CLEAR_CODE: u16 = 256;
const STOP_CODE: u16 = 257;
const FIRST_CODE: u16 = 258;

/// LZW codec over byte slices.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lzw;

impl Lzw {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Cheap shape check: any nonempty stream could be an LZW container
    /// (the stream carries no header, only the STOP sentinel).
    pub fn is_valid_container(data: &[u8]) -> bool {
        !data.is_empty()
    }
}

impl Compressor for Lzw {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut writer = BitWriter::new();

        // Single-byte strings are implicit (a byte's code is its value),
        // so the map only holds multi-byte extensions keyed by
        // (prefix code, extension byte). Clearing the map reseeds it.
        let mut dict: HashMap<(u16, u8), u16> = HashMap::new();
        let mut next_code = FIRST_CODE;
        let mut code_width = INITIAL_CODE_WIDTH;
        let mut current: Option<u16> = None;

        for &b in input {
            let cur = match current {
                Some(cur) => cur,
                None => {
                    current = Some(u16::from(b));
                    continue;
                }
            };

            if let Some(&code) = dict.get(&(cur, b)) {
                current = Some(code);
                continue;
            }

            writer.write_bits(u32::from(cur), code_width)?;

            if next_code < MAX_DICTIONARY_SIZE {
                dict.insert((cur, b), next_code);
                next_code += 1;
                if u32::from(next_code) > (1 << code_width) && code_width < MAX_CODE_WIDTH {
                    code_width += 1;
                }
            } else {
                writer.write_bits(u32::from(CLEAR_CODE), code_width)?;
                dict.clear();
                next_code = FIRST_CODE;
                code_width = INITIAL_CODE_WIDTH;
            }

            current = Some(u16::from(b));
        }

        if let Some(cur) = current {
            writer.write_bits(u32::from(cur), code_width)?;
        }

        // The decoder books the entry for the final code before it reads
        // STOP; mirror its width check so STOP lands at the width it
        // expects.
        if u32::from(next_code) >= (1 << code_width) && code_width < MAX_CODE_WIDTH {
            code_width += 1;
        }
        writer.write_bits(u32::from(STOP_CODE), code_width)?;

        Ok(writer.finish())
    }

    fn name(&self) -> &'static str {
        "LZW"
    }
}

/// One decoding dictionary entry: a byte string represented as its parent
/// string plus one suffix byte, with the first byte and length cached.
#[derive(Debug, Clone, Copy)]
struct Entry {
    parent: u16,
    suffix: u8,
    first: u8,
    len: u32,
}

const NO_PARENT: u16 = u16::MAX;

/// Sequentially indexed decoding dictionary.
///
/// Entries 0..=255 are the single bytes; 256 and 257 are inert zero-length
/// placeholders for the control codes.
#[derive(Debug)]
struct DecodeTable {
    entries: Vec<Entry>,
}

impl DecodeTable {
    fn seeded() -> Self {
        let mut entries = Vec::with_capacity(usize::from(MAX_DICTIONARY_SIZE));
        for b in 0..=255u8 {
            entries.push(Entry {
                parent: NO_PARENT,
                suffix: b,
                first: b,
                len: 1,
            });
        }
        for _ in 0..2 {
            entries.push(Entry {
                parent: NO_PARENT,
                suffix: 0,
                first: 0,
                len: 0,
            });
        }
        Self { entries }
    }

    fn reset(&mut self) {
        self.entries.truncate(usize::from(FIRST_CODE));
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, parent: u16, suffix: u8) {
        let p = self.entries[usize::from(parent)];
        self.entries.push(Entry {
            parent,
            suffix,
            first: if p.len == 0 { suffix } else { p.first },
            len: p.len + 1,
        });
    }

    fn is_empty_entry(&self, code: u16) -> bool {
        self.entries[usize::from(code)].len == 0
    }

    /// Append the string for `code` to `out` by walking the parent chain
    /// and reversing the appended region.
    fn emit(&self, code: u16, out: &mut Vec<u8>) {
        let start = out.len();
        let mut c = code;
        loop {
            let e = self.entries[usize::from(c)];
            if e.len == 0 {
                break;
            }
            out.push(e.suffix);
            if e.parent == NO_PARENT {
                break;
            }
            c = e.parent;
        }
        out[start..].reverse();
    }
}

impl Decompressor for Lzw {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Err(LzwError::EmptyStream.into());
        }

        let mut reader = BitReader::new(input);
        let mut table = DecodeTable::seeded();
        let mut next_code = FIRST_CODE;
        let mut code_width = INITIAL_CODE_WIDTH;
        let mut output = Vec::new();

        let mut prev = reader.read_bits(code_width) as u16;
        if prev == STOP_CODE {
            return Ok(output);
        }
        if usize::from(prev) >= table.len() {
            return Err(LzwError::CorruptCode {
                code: prev,
                dict_len: table.len(),
            }
            .into());
        }
        table.emit(prev, &mut output);

        while reader.has_data() {
            let code = reader.read_bits(code_width) as u16;

            if code == STOP_CODE {
                break;
            }

            if code == CLEAR_CODE {
                table.reset();
                next_code = FIRST_CODE;
                code_width = INITIAL_CODE_WIDTH;

                prev = reader.read_bits(code_width) as u16;
                if prev == STOP_CODE {
                    break;
                }
                if usize::from(prev) >= table.len() {
                    return Err(LzwError::CorruptCode {
                        code: prev,
                        dict_len: table.len(),
                    }
                    .into());
                }
                table.emit(prev, &mut output);
                continue;
            }

            let start = output.len();
            if usize::from(code) < table.len() {
                table.emit(code, &mut output);
            } else if code == next_code {
                // KwKwK: the referenced entry is prev + prev[0] and has
                // not been appended yet.
                if table.is_empty_entry(prev) {
                    return Err(LzwError::CorruptCode {
                        code,
                        dict_len: table.len(),
                    }
                    .into());
                }
                table.emit(prev, &mut output);
                let first = output[start];
                output.push(first);
            } else {
                return Err(LzwError::CorruptCode {
                    code,
                    dict_len: table.len(),
                }
                .into());
            }

            if next_code < MAX_DICTIONARY_SIZE {
                table.push(prev, output[start]);
                next_code += 1;
                // One insert earlier than the encoder's own check; see the
                // module docs on width lockstep.
                if u32::from(next_code) >= (1 << code_width) && code_width < MAX_CODE_WIDTH {
                    code_width += 1;
                }
            }

            prev = code;
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "LZW"
    }
}
