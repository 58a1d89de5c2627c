//! Simulation statistics collection and reporting.
//!
//! Tracks cycle counts, retired instructions, stalls, and memory/branch
//! activity during simulation execution.

use serde::Serialize;
use std::time::Instant;

/// Simulation statistics tracking all performance counters.
pub struct SimStats {
    start_time: Instant,
    /// Clock cycles executed.
    pub cycles: u64,
    /// Instructions retired at writeback (register-writing only).
    pub instructions_retired: u64,
    /// Load-use stall cycles.
    pub stalls: u64,
    /// Branches resolved taken.
    pub branches_taken: u64,
    /// Data-memory reads performed.
    pub loads: u64,
    /// Data-memory writes performed.
    pub stores: u64,
}

/// Machine-readable statistics summary.
#[derive(Debug, Serialize)]
pub struct StatsSummary {
    pub cycles: u64,
    pub instructions: u64,
    pub stalls: u64,
    pub cpi: f64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            stalls: 0,
            branches_taken: 0,
            loads: 0,
            stores: 0,
        }
    }
}

impl SimStats {
    /// Cycles per retired instruction.
    pub fn cpi(&self) -> f64 {
        self.cycles as f64 / self.instructions_retired.max(1) as f64
    }

    /// Returns the `{cycles, instructions, stalls, cpi}` summary view.
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            cycles: self.cycles,
            instructions: self.instructions_retired,
            stalls: self.stalls,
            cpi: self.cpi(),
        }
    }

    /// Prints a formatted summary of all simulation statistics.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        println!("\n==================================================");
        println!("MIPS PIPELINE SIMULATION STATISTICS");
        println!("==================================================");
        println!("host_seconds        {:.4} s", seconds);
        println!("sim_cycles          {}", self.cycles);
        println!("sim_insts           {}", self.instructions_retired);
        println!("sim_cpi             {:.4}", self.cpi());
        println!("--------------------------------------------------");
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        println!(
            "stalls.load_use     {} ({:.2}%)",
            self.stalls,
            (self.stalls as f64 / cyc as f64) * 100.0
        );
        println!("branches.taken      {}", self.branches_taken);
        println!("mem.loads           {}", self.loads);
        println!("mem.stores          {}", self.stores);
        println!("==================================================");
    }
}
