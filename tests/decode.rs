mod common;

use common::{enc_i, enc_j, enc_r};
use mips_rs::decoder::{Decoder, Format};
use mips_rs::isa::mips32::Mips32Decoder;
use mips_rs::LabelTable;

#[test]
fn j_target_uses_following_pc() {
    let dec = Mips32Decoder::new();
    let mut labels = LabelTable::new();
    let d = dec.decode(enc_j(2, 1), 8, &mut labels);
    assert_eq!(d.opcode, 2);
    assert_eq!(d.format, Format::J);
    assert_eq!(d.jta, 4);
    assert_eq!(labels.get(4), Some("L0"));
}

#[test]
fn j_and_jal_keep_their_opcode() {
    // Regression: the opcode must be masked before shifting for J-type words.
    let dec = Mips32Decoder::new();
    let mut labels = LabelTable::new();
    assert_eq!(dec.decode(enc_j(2, 0x3FF_FFFF), 4, &mut labels).opcode, 2);
    assert_eq!(dec.decode(enc_j(3, 0x40), 4, &mut labels).opcode, 3);
}

#[test]
fn j_region_comes_from_delay_slot() {
    let dec = Mips32Decoder::new();
    let mut labels = LabelTable::new();
    // jump sitting in the last word of a 256 MiB region
    let d = dec.decode(enc_j(2, 0x10), 0x1000_0000, &mut labels);
    assert_eq!(d.jta, 0x1000_0040);
}

#[test]
fn branch_to_self() {
    let dec = Mips32Decoder::new();
    let mut labels = LabelTable::new();
    let d = dec.decode(enc_i(4, 0, 0, 0xFFFF), 0x24, &mut labels);
    assert_eq!(d.jta, 0x20);
    assert_eq!(labels.get(0x20), Some("L0"));
}

#[test]
fn forward_branch_is_relative_to_next_word() {
    let dec = Mips32Decoder::new();
    let mut labels = LabelTable::new();
    // bgtz $a0, +2 words, at 0x1000
    let d = dec.decode(enc_i(7, 4, 0, 2), 0x1004, &mut labels);
    assert_eq!(d.jta, 0x100C);
}

#[test]
fn large_negative_offset_does_not_truncate() {
    let dec = Mips32Decoder::new();
    let mut labels = LabelTable::new();
    // -0x8000 words = -0x20000 bytes
    let d = dec.decode(enc_i(5, 1, 2, 0x8000), 0x0004_0000, &mut labels);
    assert_eq!(d.jta, 0x0002_0000);
}

#[test]
fn cop1_branch_gets_target() {
    let dec = Mips32Decoder::new();
    let mut labels = LabelTable::new();
    let d = dec.decode(enc_i(17, 8, 1, 3), 0x10, &mut labels);
    assert_eq!(d.jta, 0x1C);
    assert_eq!(labels.len(), 1);
}

#[test]
fn r_type_fields() {
    let dec = Mips32Decoder::new();
    let mut labels = LabelTable::new();
    let d = dec.decode(enc_r(0, 17, 18, 19, 7, 42), 4, &mut labels);
    assert_eq!(d.format, Format::R);
    assert_eq!((d.rs, d.rt, d.rd, d.shamt, d.funct), (17, 18, 19, 7, 42));
    assert_eq!(d.jta, 0);

    for op in [16, 28] {
        assert_eq!(dec.decode(enc_r(op, 0, 1, 2, 0, 2), 4, &mut labels).format, Format::R);
    }
    assert!(labels.is_empty());
}

#[test]
fn i_type_fields() {
    let dec = Mips32Decoder::new();
    let mut labels = LabelTable::new();
    let d = dec.decode(enc_i(36, 29, 8, 0x0010), 4, &mut labels);
    assert_eq!(d.format, Format::I);
    assert_eq!((d.opcode, d.rs, d.rt, d.imm), (36, 29, 8, 0x10));
    assert_eq!(d.jta, 0);
}
