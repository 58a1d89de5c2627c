//! Assembler helpers.
//!
//! Builds bit-exact 32-bit instruction words for the supported mnemonics.
//! These are conveniences for tests, demo programs, and callers that want
//! to assemble small programs without an external toolchain; the pipeline
//! itself only ever consumes the encoded words.
//!
//! Formats:
//!
//! * R-type: `opcode(6) | rs(5) | rt(5) | rd(5) | shamt(5) | funct(6)`
//! * I-type: `opcode(6) | rs(5) | rt(5) | immediate(16)`
//! * J-type: `opcode(6) | address(26)`

use super::opcodes;

/// Encodes an R-type instruction.
pub fn r_type(opcode: u8, rs: usize, rt: usize, rd: usize, shamt: u8, funct: u8) -> u32 {
    ((opcode as u32 & 0x3F) << 26)
        | ((rs as u32 & 0x1F) << 21)
        | ((rt as u32 & 0x1F) << 16)
        | ((rd as u32 & 0x1F) << 11)
        | ((shamt as u32 & 0x1F) << 6)
        | (funct as u32 & 0x3F)
}

/// Encodes an I-type instruction. The immediate is two's-complement.
pub fn i_type(opcode: u8, rs: usize, rt: usize, immediate: i16) -> u32 {
    ((opcode as u32 & 0x3F) << 26)
        | ((rs as u32 & 0x1F) << 21)
        | ((rt as u32 & 0x1F) << 16)
        | (immediate as u16 as u32)
}

/// Encodes a J-type instruction.
pub fn j_type(opcode: u8, address: u32) -> u32 {
    ((opcode as u32 & 0x3F) << 26) | (address & 0x03FF_FFFF)
}

/// ADD: `rd = rs + rt`
pub fn add(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(opcodes::OP_RTYPE, rs, rt, rd, 0, opcodes::FUNCT_ADD)
}

/// SUB: `rd = rs - rt`
pub fn sub(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(opcodes::OP_RTYPE, rs, rt, rd, 0, opcodes::FUNCT_SUB)
}

/// AND: `rd = rs & rt`
pub fn and(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(opcodes::OP_RTYPE, rs, rt, rd, 0, opcodes::FUNCT_AND)
}

/// OR: `rd = rs | rt`
pub fn or(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(opcodes::OP_RTYPE, rs, rt, rd, 0, opcodes::FUNCT_OR)
}

/// SLT: `rd = (rs < rt) ? 1 : 0`
pub fn slt(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(opcodes::OP_RTYPE, rs, rt, rd, 0, opcodes::FUNCT_SLT)
}

/// NOR: `rd = !(rs | rt)`
pub fn nor(rd: usize, rs: usize, rt: usize) -> u32 {
    r_type(opcodes::OP_RTYPE, rs, rt, rd, 0, opcodes::FUNCT_NOR)
}

/// ADDI: `rt = rs + immediate`
pub fn addi(rt: usize, rs: usize, immediate: i16) -> u32 {
    i_type(opcodes::OP_ADDI, rs, rt, immediate)
}

/// ANDI: `rt = rs & immediate`
pub fn andi(rt: usize, rs: usize, immediate: i16) -> u32 {
    i_type(opcodes::OP_ANDI, rs, rt, immediate)
}

/// ORI: `rt = rs | immediate`
pub fn ori(rt: usize, rs: usize, immediate: i16) -> u32 {
    i_type(opcodes::OP_ORI, rs, rt, immediate)
}

/// SLTI: `rt = (rs < immediate) ? 1 : 0`
pub fn slti(rt: usize, rs: usize, immediate: i16) -> u32 {
    i_type(opcodes::OP_SLTI, rs, rt, immediate)
}

/// LW: `rt = memory[rs + offset]`
pub fn lw(rt: usize, offset: i16, rs: usize) -> u32 {
    i_type(opcodes::OP_LW, rs, rt, offset)
}

/// SW: `memory[rs + offset] = rt`
pub fn sw(rt: usize, offset: i16, rs: usize) -> u32 {
    i_type(opcodes::OP_SW, rs, rt, offset)
}

/// BEQ: `if rs == rt { pc = pc + 4 + (offset << 2) }`
pub fn beq(rs: usize, rt: usize, offset: i16) -> u32 {
    i_type(opcodes::OP_BEQ, rs, rt, offset)
}

/// BNE: `if rs != rt { pc = pc + 4 + (offset << 2) }`
pub fn bne(rs: usize, rt: usize, offset: i16) -> u32 {
    i_type(opcodes::OP_BNE, rs, rt, offset)
}

/// J: decoded by the core but never executed.
pub fn j(address: u32) -> u32 {
    j_type(opcodes::OP_J, address)
}

/// NOP: the all-zero word.
pub fn nop() -> u32 {
    opcodes::NOP
}
