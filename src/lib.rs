pub mod decoder;
pub mod disasm;
pub mod disassembler;
pub mod input;
pub mod instructions;
pub mod labels;
pub mod regs;

pub mod isa {
    pub mod mips32; // MIPS32 subset (R/I/J formats)
}

pub use disassembler::{disassemble, DisasmConfig, DisasmError, Disassembler, Line, Listing};
pub use input::{AsciiWords, BinaryWords, WordSource};
pub use labels::LabelTable;
