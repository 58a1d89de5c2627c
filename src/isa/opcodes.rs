//! Opcode and funct constants for the MIPS integer subset.

pub const OP_RTYPE: u8 = 0x00;
pub const OP_J: u8 = 0x02;
pub const OP_BEQ: u8 = 0x04;
pub const OP_BNE: u8 = 0x05;
pub const OP_ADDI: u8 = 0x08;
pub const OP_SLTI: u8 = 0x0A;
pub const OP_ANDI: u8 = 0x0C;
pub const OP_ORI: u8 = 0x0D;
pub const OP_LW: u8 = 0x23;
pub const OP_SW: u8 = 0x2B;

pub const FUNCT_ADD: u8 = 0x20;
pub const FUNCT_SUB: u8 = 0x22;
pub const FUNCT_AND: u8 = 0x24;
pub const FUNCT_OR: u8 = 0x25;
pub const FUNCT_NOR: u8 = 0x27;
pub const FUNCT_SLT: u8 = 0x2A;

/// The canonical no-operation encoding (the all-zero word).
pub const NOP: u32 = 0x0000_0000;
