/// Conventional o32 names for the 32 general-purpose registers.
const NAMES: [&str; 32] = [
    "$0", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", //
    "$t0", "$t1", "$t2", "$t3", "$t4", "$t5", "$t6", "$t7", //
    "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", //
    "$t8", "$t9", "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Name of register `idx`, or `None` if it does not fit in 5 bits.
pub fn reg_name(idx: u8) -> Option<&'static str> {
    NAMES.get(idx as usize).copied()
}

/// Register name for a field already masked to 5 bits by the decoder.
pub(crate) fn gpr(idx: u8) -> &'static str {
    NAMES[(idx & 0x1F) as usize]
}
