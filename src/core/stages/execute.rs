use crate::core::control::{self, OpBSrc, RegDst};
use crate::core::cpu::Processor;
use crate::core::pipeline::{hazards, ExMem, ExMemEntry};
use crate::core::units::alu::Alu;

/// EX: resolves forwarding, drives the ALU, and selects the destination
/// register.
///
/// The forwarded B value is kept as the store data even when the
/// immediate overrides ALU input B; a store two instructions behind its
/// producer still picks up the fresh value this way.
pub fn execute_stage(cpu: &Processor) -> ExMem {
    let entry = match cpu.id_ex.entry {
        Some(entry) => entry,
        None => return ExMem::bubble(),
    };

    let (fwd_a, fwd_b) = hazards::detect_forwarding(&entry, &cpu.ex_mem, &cpu.mem_wb);
    let input_a = hazards::operand(fwd_a, entry.read_data1, &cpu.ex_mem, &cpu.mem_wb);
    let store_data = hazards::operand(fwd_b, entry.read_data2, &cpu.ex_mem, &cpu.mem_wb);

    let input_b = match entry.ctrl.alu_src {
        OpBSrc::Imm => entry.imm,
        OpBSrc::Reg2 => store_data,
    };

    let ctrl_code = control::alu_control(entry.ctrl.alu_op, entry.funct);
    let (alu_result, zero_flag) = Alu::execute(ctrl_code, input_a, input_b);

    let write_reg = match entry.ctrl.reg_dst {
        RegDst::Rd => entry.rd,
        RegDst::Rt => entry.rt,
    };

    if cpu.trace {
        eprintln!(
            "EX  pc={:#x} alu({}, {}) -> {} zero={}",
            entry.pc, input_a, input_b, alu_result, zero_flag
        );
    }

    ExMem::latch(ExMemEntry {
        pc: entry.pc,
        alu_result,
        store_data,
        write_reg,
        zero_flag,
        branch_offset: entry.imm,
        ctrl: entry.ctrl,
    })
}
