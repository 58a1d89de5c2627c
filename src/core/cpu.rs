use crate::config::Config;
use crate::core::arch::mem::DEFAULT_MEM_WORDS;
use crate::core::arch::{DataMemory, InstructionMemory, RegisterFile};
use crate::core::pipeline::{ExMem, IdEx, IfId, IfIdEntry, MemWb, PipelineLatch};
use crate::core::stages;
use crate::stats::SimStats;

/// Five-stage in-order pipelined MIPS processor.
///
/// Each call to [`tick`](Processor::tick) advances the machine by one
/// clock edge: all five stage bodies run against the current latch state,
/// then the latches, PC, and counters commit at once. Within a tick no
/// stage observes another stage's new output.
pub struct Processor {
    pub regs: RegisterFile,
    pub instr_mem: InstructionMemory,
    pub data_mem: DataMemory,
    pub pc: u32,
    pub trace: bool,

    pub if_id: IfId,
    pub id_ex: IdEx,
    pub ex_mem: ExMem,
    pub mem_wb: MemWb,

    pub stats: SimStats,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(DEFAULT_MEM_WORDS, DEFAULT_MEM_WORDS)
    }
}

impl Processor {
    /// Creates a processor with the given memory sizes in words.
    pub fn new(instr_words: usize, data_words: usize) -> Self {
        Self {
            regs: RegisterFile::new(),
            instr_mem: InstructionMemory::new(instr_words),
            data_mem: DataMemory::new(data_words),
            pc: 0,
            trace: false,
            if_id: IfId::bubble(),
            id_ex: IdEx::bubble(),
            ex_mem: ExMem::bubble(),
            mem_wb: MemWb::bubble(),
            stats: SimStats::default(),
        }
    }

    /// Creates a processor from a parsed configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut cpu = Self::new(config.memory.instr_words, config.memory.data_words);
        cpu.trace = config.general.trace;
        cpu
    }

    /// Loads a program into instruction memory and points the PC at it.
    pub fn load_program(&mut self, instructions: &[u32], start_address: u32) {
        self.instr_mem.load_program(instructions, start_address);
        self.pc = start_address;
    }

    /// Runs until the pipeline drains or the cycle budget is exhausted.
    ///
    /// The pipeline counts as drained once at least one cycle has run and
    /// [`is_idle`](Processor::is_idle) holds; a fresh processor always
    /// executes its first cycle. Calling `run` again on a finished
    /// pipeline leaves all architectural state untouched.
    pub fn run(&mut self, max_cycles: u64) {
        for _ in 0..max_cycles {
            if self.stats.cycles > 0 && self.is_idle() {
                break;
            }
            self.tick();
        }
    }

    /// Advances the processor by one clock edge.
    pub fn tick(&mut self) {
        self.stats.cycles += 1;

        if self.trace {
            eprintln!("=== cycle {} pc={:#x} ===", self.stats.cycles, self.pc);
        }

        // Compute phase: stage bodies in WB-to-IF order, each reading the
        // latch state of the previous cycle. WB runs first so decode sees
        // this cycle's register write.
        stages::write_back::wb_stage(self);
        let (mem_wb, redirect) = stages::memory_access::mem_stage(self);
        let ex_mem = stages::execute::execute_stage(self);
        let (id_ex, stall) = stages::decode::decode_stage(self);
        let if_id = stages::fetch::fetch_stage(self, stall);

        self.commit(if_id, id_ex, ex_mem, mem_wb, redirect);
    }

    /// Commit phase: the simulated clock edge.
    ///
    /// A taken branch redirects the PC and squashes the three younger
    /// in-flight instructions; otherwise the candidates latch normally.
    /// A stalled fetch produced no candidate, so IF/ID and the PC hold.
    /// MEM/WB is always updated.
    fn commit(
        &mut self,
        if_id: Option<IfIdEntry>,
        id_ex: IdEx,
        ex_mem: ExMem,
        mem_wb: MemWb,
        redirect: Option<u32>,
    ) {
        if let Some(target) = redirect {
            self.pc = target;
            self.if_id.flush();
            self.id_ex.flush();
            self.ex_mem.flush();
        } else {
            if let Some(entry) = if_id {
                self.pc = entry.pc.wrapping_add(4);
                self.if_id = IfId::latch(entry);
            }
            self.id_ex = id_ex;
            self.ex_mem = ex_mem;
        }
        self.mem_wb = mem_wb;
    }

    /// Checks whether the pipeline is completely idle.
    ///
    /// IF/ID counts as empty when it holds the all-zero word, so a
    /// deliberately fetched NOP is indistinguishable from a bubble;
    /// programs terminate by running into a trailing stretch of NOPs.
    pub fn is_idle(&self) -> bool {
        self.if_id.entry.map_or(true, |e| e.inst == 0)
            && self.id_ex.is_empty()
            && self.ex_mem.is_empty()
            && self.mem_wb.is_empty()
    }

    /// Returns a snapshot of the register file.
    pub fn registers(&self) -> [i32; 32] {
        self.regs.snapshot()
    }

    /// Prints the PC and the full register file to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#010x}", self.pc);
        self.regs.dump();
    }
}
