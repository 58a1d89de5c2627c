//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for detecting data hazards in the
//! pipeline and resolving them through register forwarding or a one-cycle
//! stall. Read-After-Write hazards between ALU instructions are covered
//! entirely by forwarding; only a load followed immediately by a consumer
//! of its destination needs a stall, because the loaded value does not
//! exist before the Memory stage.

use crate::core::pipeline::latches::{ExMem, IdEx, IdExEntry, IfId, MemWb};
use crate::isa::decode;

/// Forwarding source for one ALU operand slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Forward {
    /// Use the register-file value already latched into ID/EX.
    #[default]
    None,
    /// Use the ALU result sitting in the EX/MEM latch.
    ExMem,
    /// Use the writeback value sitting in the MEM/WB latch.
    MemWb,
}

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction being decoded depends on
/// data that is still being loaded by the instruction in the Execute
/// stage. The load destination (`rt`) is compared against both source
/// slots of the IF/ID instruction; `rt == 0` never triggers, since the
/// zero register cannot carry a dependency.
///
/// # Returns
///
/// `true` if a one-cycle stall is needed, `false` otherwise.
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    let ex_inst = match &id_ex.entry {
        Some(entry) => entry,
        None => return false,
    };
    if !ex_inst.ctrl.mem_read || ex_inst.rt == 0 {
        return false;
    }

    let id_inst = match &if_id.entry {
        Some(entry) => entry,
        None => return false,
    };
    let next = decode::fields(id_inst.inst);
    ex_inst.rt == next.rs || ex_inst.rt == next.rt
}

/// Picks the forwarding sources for both ALU operand slots.
///
/// Slot A is selected by the consumer's `rs`, slot B by its `rt`. For each
/// slot the EX/MEM producer wins over the MEM/WB producer because it is
/// the more recent write; a producer only qualifies when it writes a
/// nonzero register matching the consumer index.
///
/// # Returns
///
/// `(forward_a, forward_b)` forwarding selections.
pub fn detect_forwarding(id_entry: &IdExEntry, ex_mem: &ExMem, mem_wb: &MemWb) -> (Forward, Forward) {
    let pick = |src: usize| -> Forward {
        if let Some(mem_entry) = &ex_mem.entry {
            if mem_entry.ctrl.reg_write && mem_entry.write_reg != 0 && mem_entry.write_reg == src {
                return Forward::ExMem;
            }
        }
        if let Some(wb_entry) = &mem_wb.entry {
            if wb_entry.ctrl.reg_write && wb_entry.write_reg != 0 && wb_entry.write_reg == src {
                return Forward::MemWb;
            }
        }
        Forward::None
    };

    (pick(id_entry.rs), pick(id_entry.rt))
}

/// Resolves an operand value for the chosen forwarding source.
///
/// The MEM/WB path forwards the loaded data when the producer is a load
/// (`mem_to_reg`), otherwise its ALU result — the same mux the writeback
/// stage uses.
pub fn operand(sel: Forward, reg_val: i32, ex_mem: &ExMem, mem_wb: &MemWb) -> i32 {
    match sel {
        Forward::None => reg_val,
        Forward::ExMem => ex_mem.entry.map_or(0, |e| e.alu_result),
        Forward::MemWb => mem_wb.entry.map_or(0, |e| {
            if e.ctrl.mem_to_reg {
                e.mem_data
            } else {
                e.alu_result
            }
        }),
    }
}
