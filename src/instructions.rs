use crate::decoder::Instruction;

/// Operand template, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Empty,
    Rs,
    Rd,
    RsRt,
    RtRd,
    RdRsRt,
    RdRtRs,
    RdRtShamt,
    RtRsImm,
    RtImm,
    /// `rt, imm(rs)`
    RtMem,
    /// Branch comparing two registers.
    RsRtLabel,
    RsLabel,
    Label,
}

/// Register field consulted by opcodes that pick one of two mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Rs,
    Rt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// SPECIAL (opcode 0), selected by funct.
    Special(u8),
    /// Selected by primary opcode alone.
    Op(u8),
    /// Selected by opcode and whether its [`split_field`] is zero.
    Split { opcode: u8, zero: bool },
}

impl Key {
    pub fn of(d: &Instruction) -> Self {
        if d.opcode == 0 {
            return Key::Special(d.funct);
        }
        match split_field(d.opcode) {
            Some(Field::Rs) => Key::Split { opcode: d.opcode, zero: d.rs == 0 },
            Some(Field::Rt) => Key::Split { opcode: d.opcode, zero: d.rt == 0 },
            None => Key::Op(d.opcode),
        }
    }
}

pub fn split_field(opcode: u8) -> Option<Field> {
    match opcode {
        1 | 17 => Some(Field::Rt),
        16 => Some(Field::Rs),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub key: Key,
    pub mnemonic: &'static str,
    pub layout: Layout,
}

const fn desc(key: Key, mnemonic: &'static str, layout: Layout) -> InstrDesc {
    InstrDesc { key, mnemonic, layout }
}

use Key::{Op, Special, Split};
use Layout::*;

pub const TABLE: &[InstrDesc] = &[
    // SPECIAL
    desc(Special(0), "sll", RdRtShamt),
    desc(Special(2), "srl", RdRtShamt),
    desc(Special(3), "sra", RdRtShamt),
    desc(Special(4), "sllv", RdRtRs),
    desc(Special(6), "srlv", RdRtRs),
    desc(Special(7), "srav", RdRtRs),
    desc(Special(8), "jr", Rs),
    desc(Special(9), "jalr", Rs),
    desc(Special(10), "break", Empty),
    desc(Special(11), "break", Empty),
    desc(Special(12), "syscall", Empty),
    desc(Special(13), "break", Empty),
    desc(Special(16), "mfhi", Rd),
    desc(Special(17), "mthi", Rs),
    desc(Special(18), "mflo", Rd),
    desc(Special(19), "mtlo", Rs),
    desc(Special(24), "mult", RsRt),
    desc(Special(25), "multu", RsRt),
    desc(Special(26), "div", RsRt),
    desc(Special(27), "divu", RsRt),
    desc(Special(32), "add", RdRsRt),
    desc(Special(33), "addu", RdRsRt),
    desc(Special(34), "sub", RdRsRt),
    desc(Special(35), "subu", RdRsRt),
    desc(Special(36), "and", RdRsRt),
    desc(Special(37), "or", RdRsRt),
    desc(Special(38), "xor", RdRsRt),
    desc(Special(39), "nor", RdRsRt),
    desc(Special(42), "slt", RdRsRt),
    desc(Special(43), "sltu", RdRsRt),
    // COP0 / SPECIAL2
    desc(Split { opcode: 16, zero: true }, "mfc0", RtRd),
    desc(Split { opcode: 16, zero: false }, "mtc0", RtRd),
    desc(Op(28), "mul", RdRsRt),
    // branches
    desc(Split { opcode: 1, zero: true }, "bltz", RsLabel),
    desc(Split { opcode: 1, zero: false }, "bgez", RsLabel),
    desc(Op(4), "beq", RsRtLabel),
    desc(Op(5), "bne", RsRtLabel),
    desc(Op(6), "blez", RsLabel),
    desc(Op(7), "bgtz", RsLabel),
    desc(Split { opcode: 17, zero: true }, "bc1f", Label),
    desc(Split { opcode: 17, zero: false }, "bc1t", Label),
    // immediate arithmetic/logic
    desc(Op(8), "addi", RtRsImm),
    desc(Op(9), "addiu", RtRsImm),
    desc(Op(10), "slti", RtRsImm),
    desc(Op(11), "sltiu", RtRsImm),
    desc(Op(12), "andi", RtRsImm),
    desc(Op(13), "ori", RtRsImm),
    desc(Op(14), "xori", RtRsImm),
    desc(Op(15), "lui", RtImm),
    // loads
    desc(Op(32), "lb", RtMem),
    desc(Op(33), "lh", RtMem),
    desc(Op(35), "lw", RtMem),
    desc(Op(36), "lbu", RtMem),
    desc(Op(37), "lhu", RtMem),
    // jumps
    desc(Op(2), "j", Label),
    desc(Op(3), "jal", Label),
];

/// Table entry for `d`, or `None` for an encoding outside the covered subset.
pub fn lookup(d: &Instruction) -> Option<&'static InstrDesc> {
    let key = Key::of(d);
    TABLE.iter().find(|desc| desc.key == key)
}
