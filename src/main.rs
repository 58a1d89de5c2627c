//! MIPS Pipeline Simulator CLI.
//!
//! The main executable for the simulator. It handles command-line argument
//! parsing, configuration loading, and the simulation run.
//!
//! # Usage
//!
//! Pass a program image with `--file` (hex listing or raw `.bin`); the
//! simulator runs it to completion or until the cycle budget is spent,
//! then dumps the register file and statistics. `--json` switches the
//! report to a machine-readable summary.

use clap::Parser;
use std::{fs, process};

use mips_emulator::config::Config;
use mips_emulator::core::Processor;
use mips_emulator::sim::loader;

/// Command-line arguments for the MIPS pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "MIPS 32-bit Cycle-Accurate Pipeline Simulator")]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Program image: hex listing, or raw little-endian words (.bin).
    #[arg(short, long)]
    file: String,

    /// Enable per-stage trace output on stderr.
    #[arg(long)]
    trace: bool,

    /// Print the statistics summary as JSON instead of the full report.
    #[arg(long)]
    json: bool,

    /// Override the configured cycle budget.
    #[arg(long)]
    max_cycles: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let config: Config = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("[!] FATAL: Could not read config '{}': {}", path, e);
                process::exit(1);
            });
            toml::from_str(&content).unwrap_or_else(|e| {
                eprintln!("[!] FATAL: Could not parse config '{}': {}", path, e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    let max_cycles = args.max_cycles.unwrap_or(config.general.max_cycles);
    let words = loader::load_words(&args.file);

    let mut cpu = Processor::from_config(&config);
    cpu.trace = cpu.trace || args.trace;

    if !args.json {
        println!("Global Configuration");
        println!("--------------------");
        println!("  Program:        {} ({} words)", args.file, words.len());
        println!("  Start Address:  {:#x}", config.general.start_address);
        println!("  Instr Memory:   {} words", config.memory.instr_words);
        println!("  Data Memory:    {} words", config.memory.data_words);
        println!("  Cycle Budget:   {}", max_cycles);
        println!("--------------------");
    }

    cpu.load_program(&words, config.general.start_address);
    cpu.run(max_cycles);

    if args.json {
        let summary = serde_json::to_string_pretty(&cpu.stats.summary())
            .expect("statistics summary serializes");
        println!("{}", summary);
    } else {
        cpu.dump_state();
        cpu.stats.print();
    }
}
