use std::fmt;
use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::decoder::{Decoder, Instruction};
use crate::disasm::{fmt_instruction, fmt_unrecognized};
use crate::input::{BinaryWords, WordSource};
use crate::isa::mips32::Mips32Decoder;
use crate::labels::LabelTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisasmConfig {
    pub base: u32,   // address of the first word
    pub strict: bool, // unrecognized encodings abort the run
}

#[derive(thiserror::Error, Debug)]
pub enum DisasmError {
    #[error("input length {len} is not a multiple of 4")]
    Alignment { len: u64 },
    #[error("read error: {0}")]
    Io(#[from] io::Error),
    #[error("unrecognized encoding {word:#010x} at {pc:#010x}")]
    UnrecognizedEncoding { pc: u32, word: u32 },
    #[error("bad word {token:?} on line {line}")]
    BadWord { line: usize, token: String },
}

/// One emitted instruction, with the label defined at its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub addr: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
    pub recognized: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub lines: Vec<Line>,
}

impl Listing {
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            if let Some(label) = &line.label {
                writeln!(f, "{label}:")?;
            }
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// Two-pass driver: decode every word (allocating labels), then emit.
#[derive(Debug)]
pub struct Disassembler<D = Mips32Decoder> {
    cfg: DisasmConfig,
    decoder: D,
    labels: LabelTable,
    insns: Vec<Instruction>,
}

impl Disassembler {
    pub fn new(cfg: DisasmConfig) -> Self {
        Self::with_decoder(cfg, Mips32Decoder::new())
    }
}

impl<D: Decoder> Disassembler<D> {
    pub fn with_decoder(cfg: DisasmConfig, decoder: D) -> Self {
        Self { cfg, decoder, labels: LabelTable::new(), insns: Vec::new() }
    }

    pub fn config(&self) -> &DisasmConfig {
        &self.cfg
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.insns
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Decode phase. Replaces any previous results.
    pub fn decode<S: WordSource>(&mut self, src: &mut S) -> Result<(), DisasmError> {
        self.insns.clear();
        self.labels.clear();
        let mut pc = self.cfg.base;
        while let Some(raw32) = src.next_word()? {
            pc = pc.wrapping_add(4);
            let d = self.decoder.decode(raw32, pc, &mut self.labels);
            self.insns.push(d);
        }
        info!(instructions = self.insns.len(), labels = self.labels.len(), "decode done");
        Ok(())
    }

    pub fn decode_bytes(&mut self, bytes: &[u8]) -> Result<(), DisasmError> {
        self.decode(&mut BinaryWords::new(bytes))
    }

    /// Emit phase: walk the decoded words in order and attach labels.
    pub fn listing(&self) -> Result<Listing, DisasmError> {
        let mut pc = self.cfg.base;
        let mut lines = Vec::with_capacity(self.insns.len());
        let mut unknown = 0usize;
        for d in &self.insns {
            let label = self.labels.get(pc).map(str::to_owned);
            let (text, recognized) = match fmt_instruction(d, &self.labels) {
                Some(text) => (text, true),
                None if self.cfg.strict => {
                    return Err(DisasmError::UnrecognizedEncoding { pc, word: d.raw });
                }
                None => {
                    warn!("unrecognized encoding {:#010x} at {pc:#010x}", d.raw);
                    unknown += 1;
                    (fmt_unrecognized(d), false)
                }
            };
            lines.push(Line { addr: pc, label, text, recognized });
            pc = pc.wrapping_add(4);
        }
        info!(lines = lines.len(), unknown, "emit done");
        Ok(Listing { lines })
    }
}

/// Disassemble a flat big-endian binary stream in one call.
pub fn disassemble<R: Read>(reader: R, cfg: DisasmConfig) -> Result<Listing, DisasmError> {
    let mut dis = Disassembler::new(cfg);
    dis.decode(&mut BinaryWords::new(reader))?;
    dis.listing()
}
