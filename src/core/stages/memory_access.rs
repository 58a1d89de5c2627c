use crate::core::control::BranchOp;
use crate::core::cpu::Processor;
use crate::core::pipeline::{MemWb, MemWbEntry};

/// MEM: performs the optional data-memory access and resolves branches.
///
/// Returns the MEM/WB candidate and, for a taken branch, the redirect
/// target `pc + 4 + (offset << 2)` computed from the branch's own PC.
pub fn mem_stage(cpu: &mut Processor) -> (MemWb, Option<u32>) {
    let entry = match cpu.ex_mem.entry {
        Some(entry) => entry,
        None => return (MemWb::bubble(), None),
    };

    let mut mem_data = 0;
    if entry.ctrl.mem_read {
        mem_data = cpu.data_mem.read(entry.alu_result);
        cpu.stats.loads += 1;
        if cpu.trace {
            eprintln!("MEM pc={:#x} load addr={} data={}", entry.pc, entry.alu_result, mem_data);
        }
    }
    if entry.ctrl.mem_write {
        cpu.data_mem.write(entry.alu_result, entry.store_data);
        cpu.stats.stores += 1;
        if cpu.trace {
            eprintln!(
                "MEM pc={:#x} store addr={} data={}",
                entry.pc, entry.alu_result, entry.store_data
            );
        }
    }

    let taken = match entry.ctrl.branch {
        BranchOp::Eq => entry.zero_flag,
        BranchOp::Ne => !entry.zero_flag,
        BranchOp::None => false,
    };

    let redirect = if taken {
        cpu.stats.branches_taken += 1;
        let target = entry
            .pc
            .wrapping_add(4)
            .wrapping_add((entry.branch_offset << 2) as u32);
        if cpu.trace {
            eprintln!("MEM pc={:#x} branch taken -> {:#x}", entry.pc, target);
        }
        Some(target)
    } else {
        None
    };

    let candidate = MemWb::latch(MemWbEntry {
        alu_result: entry.alu_result,
        mem_data,
        write_reg: entry.write_reg,
        ctrl: entry.ctrl,
    });

    (candidate, redirect)
}
