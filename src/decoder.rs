use serde::{Deserialize, Serialize};

use crate::labels::LabelTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    R,
    I,
    J,
}

impl Format {
    /// Encoding shape selected by the primary opcode.
    pub fn of(opcode: u8) -> Self {
        match opcode {
            0 | 16 | 28 => Format::R,
            2 | 3 => Format::J,
            _ => Format::I,
        }
    }
}

/// One decoded instruction word. Fields a format does not use stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub raw: u32,
    pub format: Format,
    pub opcode: u8,
    pub rs: u8,
    pub rt: u8,
    pub rd: u8,
    pub shamt: u8,
    pub funct: u8,
    pub imm: u16,
    pub jta: u32, // branch/jump target, 0 when not a control transfer
}

impl Instruction {
    pub fn simm(&self) -> i32 {
        self.imm as i16 as i32
    }
}

/// Branch-class I-type opcodes: REGIMM, beq/bne/blez/bgtz and COP1 bc1f/bc1t.
pub fn is_branch(opcode: u8) -> bool {
    matches!(Format::of(opcode), Format::I) && (opcode <= 7 || opcode == 17)
}

pub mod field {
    pub fn opcode(raw: u32) -> u8 {
        ((raw & 0xFC00_0000) >> 26) as u8
    }
    pub fn rs(raw: u32) -> u8 {
        ((raw & 0x03E0_0000) >> 21) as u8
    }
    pub fn rt(raw: u32) -> u8 {
        ((raw & 0x001F_0000) >> 16) as u8
    }
    pub fn rd(raw: u32) -> u8 {
        ((raw & 0x0000_F800) >> 11) as u8
    }
    pub fn shamt(raw: u32) -> u8 {
        ((raw & 0x0000_07C0) >> 6) as u8
    }
    pub fn funct(raw: u32) -> u8 {
        (raw & 0x0000_003F) as u8
    }
    pub fn imm(raw: u32) -> u16 {
        (raw & 0x0000_FFFF) as u16
    }
    pub fn target(raw: u32) -> u32 {
        raw & 0x03FF_FFFF
    }
}

pub trait Decoder {
    /// Decode `raw32`. `pc_after` is the address of the following word.
    /// Every branch or jump target computed here is registered in `labels`.
    fn decode(&self, raw32: u32, pc_after: u32, labels: &mut LabelTable) -> Instruction;
}
