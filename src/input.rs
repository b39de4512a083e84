use std::io::{BufRead, ErrorKind, Read};

use crate::disassembler::DisasmError;

pub const CHUNK_SIZE: usize = 4096;

/// A stream of 32-bit instruction words.
pub trait WordSource {
    /// Next word, `Ok(None)` at a clean end of input.
    fn next_word(&mut self) -> Result<Option<u32>, DisasmError>;
}

/// Flat binary input, read in fixed-size chunks. Words are stored
/// big-endian; a word may straddle two chunks.
pub struct BinaryWords<R> {
    reader: R,
    chunk: Box<[u8]>,
    pos: usize,
    len: usize,
    consumed: u64,
}

impl<R: Read> BinaryWords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            chunk: vec![0; CHUNK_SIZE].into_boxed_slice(),
            pos: 0,
            len: 0,
            consumed: 0,
        }
    }

    /// Bytes handed out so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    fn refill(&mut self) -> Result<usize, DisasmError> {
        loop {
            match self.reader.read(&mut self.chunk) {
                Ok(n) => {
                    self.pos = 0;
                    self.len = n;
                    return Ok(n);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: Read> WordSource for BinaryWords<R> {
    fn next_word(&mut self) -> Result<Option<u32>, DisasmError> {
        let mut word = [0u8; 4];
        let mut filled = 0;
        while filled < 4 {
            if self.pos == self.len && self.refill()? == 0 {
                break;
            }
            let n = (4 - filled).min(self.len - self.pos);
            word[filled..filled + n].copy_from_slice(&self.chunk[self.pos..self.pos + n]);
            filled += n;
            self.pos += n;
            self.consumed += n as u64;
        }
        match filled {
            0 => Ok(None),
            4 => Ok(Some(u32::from_be_bytes(word))),
            _ => Err(DisasmError::Alignment { len: self.consumed }),
        }
    }
}

/// Text input: hexadecimal words separated by whitespace, optional `0x`
/// prefix, `#` to end of line is a comment.
pub struct AsciiWords<R> {
    reader: R,
    line_no: usize,
    pending: Vec<String>,
}

impl<R: BufRead> AsciiWords<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0, pending: Vec::new() }
    }
}

fn parse_word(tok: &str) -> Option<u32> {
    let hex = tok.strip_prefix("0x").or_else(|| tok.strip_prefix("0X")).unwrap_or(tok);
    if hex.is_empty() || hex.len() > 8 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

impl<R: BufRead> WordSource for AsciiWords<R> {
    fn next_word(&mut self) -> Result<Option<u32>, DisasmError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let body = line.split('#').next().unwrap_or("");
            // stored reversed so pop() yields tokens in order
            self.pending = body.split_whitespace().rev().map(str::to_owned).collect();
        }
        let Some(tok) = self.pending.pop() else { return Ok(None) };
        match parse_word(&tok) {
            Some(w) => Ok(Some(w)),
            None => Err(DisasmError::BadWord { line: self.line_no, token: tok }),
        }
    }
}
