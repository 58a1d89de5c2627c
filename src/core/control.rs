use crate::core::units::alu::AluControl;
use crate::isa::decode::opcode;
use crate::isa::opcodes;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegDst {
    #[default]
    Rt,
    Rd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    #[default]
    Reg2,
    Imm,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BranchOp {
    #[default]
    None,
    Eq,
    Ne,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    #[default]
    Add,
    Sub,
    Funct,
    And,
    Or,
    Slt,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    pub reg_dst: RegDst,
    pub alu_src: OpBSrc,
    pub mem_to_reg: bool,
    pub reg_write: bool,
    pub mem_read: bool,
    pub mem_write: bool,
    pub branch: BranchOp,
    pub alu_op: AluOp,
    pub jump: bool,
}

/// Decodes an instruction word into its control bundle.
///
/// Unrecognized opcodes decode to the all-default bundle, which flows
/// through the pipeline as a NOP.
pub fn decode(inst: u32) -> ControlSignals {
    let mut c = ControlSignals::default();

    match opcode(inst) {
        opcodes::OP_RTYPE => {
            c.reg_dst = RegDst::Rd;
            c.reg_write = true;
            c.alu_op = AluOp::Funct;
        }
        opcodes::OP_LW => {
            c.alu_src = OpBSrc::Imm;
            c.mem_to_reg = true;
            c.reg_write = true;
            c.mem_read = true;
            c.alu_op = AluOp::Add;
        }
        opcodes::OP_SW => {
            c.alu_src = OpBSrc::Imm;
            c.mem_write = true;
            c.alu_op = AluOp::Add;
        }
        opcodes::OP_BEQ => {
            c.branch = BranchOp::Eq;
            c.alu_op = AluOp::Sub;
        }
        opcodes::OP_BNE => {
            c.branch = BranchOp::Ne;
            c.alu_op = AluOp::Sub;
        }
        opcodes::OP_ADDI => {
            c.alu_src = OpBSrc::Imm;
            c.reg_write = true;
            c.alu_op = AluOp::Add;
        }
        opcodes::OP_ANDI => {
            c.alu_src = OpBSrc::Imm;
            c.reg_write = true;
            c.alu_op = AluOp::And;
        }
        opcodes::OP_ORI => {
            c.alu_src = OpBSrc::Imm;
            c.reg_write = true;
            c.alu_op = AluOp::Or;
        }
        opcodes::OP_SLTI => {
            c.alu_src = OpBSrc::Imm;
            c.reg_write = true;
            c.alu_op = AluOp::Slt;
        }
        opcodes::OP_J => {
            // Decoded only; the core never redirects the PC for jumps.
            c.jump = true;
        }
        _ => {}
    }

    c
}

/// Derives the ALU-control code from the coarse `alu_op` and the funct
/// field. Unrecognized functs fall back to Add.
pub fn alu_control(alu_op: AluOp, funct: u8) -> AluControl {
    match alu_op {
        AluOp::Add => AluControl::Add,
        AluOp::Sub => AluControl::Sub,
        AluOp::And => AluControl::And,
        AluOp::Or => AluControl::Or,
        AluOp::Slt => AluControl::Slt,
        AluOp::Funct => match funct {
            opcodes::FUNCT_ADD => AluControl::Add,
            opcodes::FUNCT_SUB => AluControl::Sub,
            opcodes::FUNCT_AND => AluControl::And,
            opcodes::FUNCT_OR => AluControl::Or,
            opcodes::FUNCT_SLT => AluControl::Slt,
            opcodes::FUNCT_NOR => AluControl::Nor,
            _ => AluControl::Add,
        },
    }
}
