use tracing::trace;

use crate::decoder::{field, is_branch, Decoder, Format, Instruction};
use crate::labels::LabelTable;

/// MIPS32 decoder for the R/I/J subset handled by the formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mips32Decoder;

impl Mips32Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for Mips32Decoder {
    fn decode(&self, raw32: u32, pc_after: u32, labels: &mut LabelTable) -> Instruction {
        let opcode = field::opcode(raw32);
        let format = Format::of(opcode);
        let mut d = Instruction {
            raw: raw32,
            format,
            opcode,
            rs: 0,
            rt: 0,
            rd: 0,
            shamt: 0,
            funct: 0,
            imm: 0,
            jta: 0,
        };

        match format {
            Format::R => {
                d.rs = field::rs(raw32);
                d.rt = field::rt(raw32);
                d.rd = field::rd(raw32);
                d.shamt = field::shamt(raw32);
                d.funct = field::funct(raw32);
            }
            Format::J => {
                // Region bits come from the delay-slot address, not the jump itself.
                d.jta = (pc_after & 0xF000_0000) | (field::target(raw32) << 2);
                labels.new_label(d.jta);
            }
            Format::I => {
                d.rs = field::rs(raw32);
                d.rt = field::rt(raw32);
                d.imm = field::imm(raw32);
                if is_branch(opcode) {
                    let off = (d.simm() << 2) as u32;
                    d.jta = pc_after.wrapping_add(off);
                    labels.new_label(d.jta);
                }
            }
        }

        trace!("{:#010x}: {raw32:#010x} {format:?} op={opcode}", pc_after.wrapping_sub(4));
        d
    }
}
