//! LS-8 simulator CLI.
//!
//! This binary provides the command-line front end for the simulator. It performs:
//! 1. **Run:** Load an `.ls8` program and execute it until `HLT`, a fault, or the cycle budget.
//! 2. **Disassemble:** Print a program listing without executing it.
//!
//! Exit status is 0 on `HLT`, 1 on a fault or load error, and 2 when the
//! cycle budget runs out.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::isa::disasm::disassemble_program;
use ls8_core::sim::{RunOutcome, Simulator, load_program_file};

/// Exit status for a clean `HLT`.
const EXIT_HALTED: u8 = 0;
/// Exit status for a fault, load error or bad configuration.
const EXIT_ERROR: u8 = 1;
/// Exit status when the cycle budget runs out.
const EXIT_CYCLE_LIMIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit computer simulator",
    long_about = "Run or disassemble LS-8 programs.\n\nPrograms are text files with one 8-digit binary byte per line; '#' starts a comment.\n\nExamples:\n  ls8 run programs/mult.ls8\n  ls8 run programs/call.ls8 --period-us 0 --stats\n  ls8 disasm programs/mult.ls8"
)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "warn", "debug", "ls8_core=trace").
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program.
    Run {
        /// Program file (.ls8).
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Trace every executed instruction.
        #[arg(long)]
        trace: bool,

        /// Stop after this many cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Clock period in microseconds; 0 runs as fast as possible.
        #[arg(long)]
        period_us: Option<u64>,

        /// Print execution statistics after the run.
        #[arg(long)]
        stats: bool,
    },

    /// Print a disassembly listing of a program.
    Disasm {
        /// Program file (.ls8).
        program: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level, matches!(cli.command, Commands::Run { trace: true, .. }));

    let code = match cli.command {
        Commands::Run {
            program,
            config,
            trace,
            max_cycles,
            period_us,
            stats,
        } => cmd_run(
            &program,
            config.as_deref(),
            trace,
            max_cycles,
            period_us,
            stats,
        ),
        Commands::Disasm { program } => cmd_disasm(&program),
    };
    ExitCode::from(code)
}

/// Installs the `tracing` subscriber on stderr.
///
/// `RUST_LOG` wins over `--log-level`. Instruction tracing raises the CPU's
/// own target to `trace` on top of whichever filter is in effect.
fn init_logging(level: &str, trace: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    if let (true, Ok(directive)) = (trace, "ls8_core::core::cpu=trace".parse()) {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the configuration (file or defaults) and applies command-line overrides.
fn build_config(
    path: Option<&Path>,
    trace: bool,
    max_cycles: Option<u64>,
    period_us: Option<u64>,
) -> Result<Config, ls8_core::common::ConfigError> {
    let mut config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if trace {
        config.general.trace_instructions = true;
    }
    if max_cycles.is_some() {
        config.general.max_cycles = max_cycles;
    }
    if let Some(period) = period_us {
        config.system.clock_period_us = period;
    }
    config.validate()?;
    Ok(config)
}

/// Runs a program to completion and maps the outcome to an exit status.
fn cmd_run(
    program: &Path,
    config_path: Option<&Path>,
    trace: bool,
    max_cycles: Option<u64>,
    period_us: Option<u64>,
    stats: bool,
) -> u8 {
    let config = match build_config(config_path, trace, max_cycles, period_us) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_ERROR;
        }
    };

    tracing::info!(program = %program.display(), ?config, "starting run");
    let mut sim = Simulator::with_config(&config);
    if let Err(e) = load_program_file(program).and_then(|image| sim.load_program(&image)) {
        eprintln!("error: {e}");
        return EXIT_ERROR;
    }

    let outcome = sim.run();
    let code = match outcome {
        RunOutcome::Halted | RunOutcome::Stopped => EXIT_HALTED,
        RunOutcome::CycleLimit => {
            eprintln!(
                "cycle limit reached after {} cycles at PC {:#04x}",
                sim.stats().cycles,
                sim.cpu.pc
            );
            EXIT_CYCLE_LIMIT
        }
        RunOutcome::Fault(_) => {
            sim.cpu.dump_state();
            EXIT_ERROR
        }
    };
    if stats {
        sim.stats().print();
    }
    code
}

/// Prints `address: bytes  mnemonic` for every instruction in a program.
fn cmd_disasm(program: &Path) -> u8 {
    let image = match load_program_file(program) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_ERROR;
        }
    };
    for (addr, width, text) in disassemble_program(&image, 0) {
        let start = usize::from(addr);
        let end = (start + usize::from(width)).min(image.len());
        let bytes: Vec<String> = image[start..end]
            .iter()
            .map(|b| format!("{b:08b}"))
            .collect();
        println!("{addr:#04x}: {:<28} {text}", bytes.join(" "));
    }
    EXIT_HALTED
}
