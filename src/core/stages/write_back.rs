use crate::core::cpu::Processor;

/// WB: writes the register file and retires the instruction.
///
/// Runs before decode within the same cycle, so a decode reading the same
/// register this cycle observes the freshly written value. Only
/// register-writing instructions bump the retired-instruction counter.
pub fn wb_stage(cpu: &mut Processor) {
    let wb = match cpu.mem_wb.entry {
        Some(entry) => entry,
        None => return,
    };

    if !wb.ctrl.reg_write {
        return;
    }

    let value = if wb.ctrl.mem_to_reg {
        wb.mem_data
    } else {
        wb.alu_result
    };

    cpu.regs.write(wb.write_reg, value);
    cpu.stats.instructions_retired += 1;

    if cpu.trace {
        eprintln!("WB  ${} <= {}", wb.write_reg, value);
    }
}
