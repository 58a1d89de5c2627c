use crate::core::control;
use crate::core::cpu::Processor;
use crate::core::pipeline::{hazards, IdEx, IdExEntry};
use crate::isa::decode;

/// ID: decodes the IF/ID instruction, reads the register file, and checks
/// for a load-use hazard.
///
/// Returns the ID/EX candidate and the stall flag. A bubble or NOP in
/// IF/ID yields a bubble candidate; a load-use hazard yields a bubble and
/// asserts the stall so fetch holds IF/ID and the PC.
pub fn decode_stage(cpu: &mut Processor) -> (IdEx, bool) {
    let entry = match cpu.if_id.entry {
        Some(entry) if entry.inst != 0 => entry,
        _ => return (IdEx::bubble(), false),
    };

    if hazards::need_stall_load_use(&cpu.id_ex, &cpu.if_id) {
        cpu.stats.stalls += 1;
        if cpu.trace {
            eprintln!("ID  pc={:#x} load-use hazard, stalling", entry.pc);
        }
        return (IdEx::bubble(), true);
    }

    let f = decode::fields(entry.inst);
    let ctrl = control::decode(entry.inst);
    let read_data1 = cpu.regs.read(f.rs);
    let read_data2 = cpu.regs.read(f.rt);

    if cpu.trace {
        eprintln!(
            "ID  pc={:#x} op={:#04x} rs=${} v={} rt=${} v={} rd=${} imm={}",
            entry.pc, f.opcode, f.rs, read_data1, f.rt, read_data2, f.rd, f.imm
        );
    }

    let candidate = IdExEntry {
        pc: entry.pc,
        read_data1,
        read_data2,
        imm: f.imm,
        rs: f.rs,
        rt: f.rt,
        rd: f.rd,
        funct: f.funct,
        ctrl,
    };

    (IdEx::latch(candidate), false)
}
