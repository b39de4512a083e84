use crate::decoder::Instruction;
use crate::instructions::{lookup, Layout};
use crate::labels::LabelTable;
use crate::regs::gpr;

/// Render one instruction line (`\tmnemonic\toperands`), or `None` when the
/// encoding has no table entry.
pub fn fmt_instruction(d: &Instruction, labels: &LabelTable) -> Option<String> {
    let desc = lookup(d)?;
    let label = || target(d, labels);
    let ops = match desc.layout {
        Layout::Empty => return Some(format!("\t{}", desc.mnemonic)),
        Layout::Rs => gpr(d.rs).to_string(),
        Layout::Rd => gpr(d.rd).to_string(),
        Layout::RsRt => format!("{}, {}", gpr(d.rs), gpr(d.rt)),
        Layout::RtRd => format!("{}, {}", gpr(d.rt), gpr(d.rd)),
        Layout::RdRsRt => format!("{}, {}, {}", gpr(d.rd), gpr(d.rs), gpr(d.rt)),
        Layout::RdRtRs => format!("{}, {}, {}", gpr(d.rd), gpr(d.rt), gpr(d.rs)),
        Layout::RdRtShamt => format!("{}, {}, {}", gpr(d.rd), gpr(d.rt), hex16(d.shamt as u16)),
        Layout::RtRsImm => format!("{}, {}, {}", gpr(d.rt), gpr(d.rs), hex16(d.imm)),
        Layout::RtImm => format!("{}, {}", gpr(d.rt), hex16(d.imm)),
        Layout::RtMem => format!("{}, {}({})", gpr(d.rt), hex16(d.imm), gpr(d.rs)),
        Layout::RsRtLabel => format!("{}, {}, {}", gpr(d.rs), gpr(d.rt), label()),
        Layout::RsLabel => format!("{}, {}", gpr(d.rs), label()),
        Layout::Label => label(),
    };
    Some(format!("\t{}\t{}", desc.mnemonic, ops))
}

/// Placeholder line for a word with no table entry.
pub fn fmt_unrecognized(d: &Instruction) -> String {
    format!("\t.word\t{:#010x}", d.raw)
}

fn hex16(v: u16) -> String {
    format!("0x{v:04x}")
}

fn target(d: &Instruction, labels: &LabelTable) -> String {
    match labels.get(d.jta) {
        Some(name) => name.to_string(),
        None => format!("{:#010x}", d.jta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;
    use crate::isa::mips32::Mips32Decoder;

    fn render(raw: u32) -> Option<String> {
        let mut labels = LabelTable::new();
        let d = Mips32Decoder::new().decode(raw, 4, &mut labels);
        fmt_instruction(&d, &labels)
    }

    #[test]
    fn renders_register_forms() {
        // addu $v0, $a0, $a1
        assert_eq!(render(0x0085_1021).as_deref(), Some("\taddu\t$v0, $a0, $a1"));
        // sll $t0, $t1, 4
        assert_eq!(render(0x0009_4100).as_deref(), Some("\tsll\t$t0, $t1, 0x0004"));
        // jr $ra
        assert_eq!(render(0x03E0_0008).as_deref(), Some("\tjr\t$ra"));
        assert_eq!(render(0x0000_000C).as_deref(), Some("\tsyscall"));
    }

    #[test]
    fn renders_immediate_forms() {
        // addiu $sp, $sp, -24
        assert_eq!(render(0x27BD_FFE8).as_deref(), Some("\taddiu\t$sp, $sp, 0xffe8"));
        // lw $ra, 20($sp)
        assert_eq!(render(0x8FBF_0014).as_deref(), Some("\tlw\t$ra, 0x0014($sp)"));
        // lui $at, 0x1000
        assert_eq!(render(0x3C01_1000).as_deref(), Some("\tlui\t$at, 0x1000"));
    }

    #[test]
    fn unknown_funct_has_no_line() {
        // SPECIAL funct 1 is unassigned
        assert_eq!(render(0x0000_0001), None);
    }

    #[test]
    fn placeholder_shows_raw_word() {
        let mut labels = LabelTable::new();
        let d = Mips32Decoder::new().decode(0xAFBF_0014, 4, &mut labels);
        assert_eq!(fmt_unrecognized(&d), "\t.word\t0xafbf0014");
    }
}
