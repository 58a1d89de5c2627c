//! Pipeline latch structures for inter-stage communication.
//!
//! Pipeline latches store instruction state as it flows through the five
//! pipeline stages. Each latch either holds one instruction entry or is
//! empty; an empty latch behaves as a NOP bubble. Latches are rewritten
//! atomically at the commit point of every cycle.

use crate::core::control::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub inst: u32,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Contains decoded instruction information: register indices, the
/// sign-extended immediate, values read from the register file, and the
/// control bundle for downstream stages.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Value read from the rs register.
    pub read_data1: i32,
    /// Value read from the rt register.
    pub read_data2: i32,
    /// Sign-extended 16-bit immediate.
    pub imm: i32,
    /// First source register index.
    pub rs: usize,
    /// Second source register index.
    pub rt: usize,
    /// Destination register index (R-type only).
    pub rd: usize,
    /// Funct field for R-type ALU selection.
    pub funct: u8,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMemEntry {
    /// Program counter of the instruction (used for branch targets).
    pub pc: u32,
    /// ALU result, doubling as the address for memory operations.
    pub alu_result: i32,
    /// Forwarded value to be stored if this is a store.
    pub store_data: i32,
    /// Destination register index selected by `reg_dst`.
    pub write_reg: usize,
    /// Zero flag from the ALU, consumed by branch resolution.
    pub zero_flag: bool,
    /// Sign-extended branch offset in words.
    pub branch_offset: i32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWbEntry {
    /// ALU computation result (for non-load instructions).
    pub alu_result: i32,
    /// Data loaded from memory (for load instructions).
    pub mem_data: i32,
    /// Destination register index.
    pub write_reg: usize,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
}

/// IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct IfId {
    /// The fetched instruction, or `None` for a bubble.
    pub entry: Option<IfIdEntry>,
}

/// ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct IdEx {
    /// The decoded instruction, or `None` for a bubble.
    pub entry: Option<IdExEntry>,
}

/// EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMem {
    /// The executed instruction, or `None` for a bubble.
    pub entry: Option<ExMemEntry>,
}

/// MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWb {
    /// The instruction ready for writeback, or `None` for a bubble.
    pub entry: Option<MemWbEntry>,
}

macro_rules! impl_latch {
    ($latch:ident, $entry:ident) => {
        impl $latch {
            /// Creates an empty (bubble) latch.
            pub fn bubble() -> Self {
                Self::default()
            }

            /// Creates a latch holding the given entry.
            pub fn latch(entry: $entry) -> Self {
                Self { entry: Some(entry) }
            }
        }

        impl PipelineLatch for $latch {
            fn flush(&mut self) {
                self.entry = None;
            }

            fn is_empty(&self) -> bool {
                self.entry.is_none()
            }
        }
    };
}

impl_latch!(IfId, IfIdEntry);
impl_latch!(IdEx, IdExEntry);
impl_latch!(ExMem, ExMemEntry);
impl_latch!(MemWb, MemWbEntry);
