use crate::core::cpu::Processor;
use crate::core::pipeline::IfIdEntry;

/// IF: reads the instruction at the current PC.
///
/// Returns `None` when the hazard unit asserted a stall this cycle, so
/// neither the IF/ID latch nor the PC is committed.
pub fn fetch_stage(cpu: &Processor, stall: bool) -> Option<IfIdEntry> {
    if stall {
        if cpu.trace {
            eprintln!("IF  stalled");
        }
        return None;
    }

    let inst = cpu.instr_mem.read(cpu.pc);

    if cpu.trace {
        eprintln!("IF  pc={:#x} inst={:#010x}", cpu.pc, inst);
    }

    Some(IfIdEntry { pc: cpu.pc, inst })
}
