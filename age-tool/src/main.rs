use std::path::PathBuf;
use std::process::ExitCode;

use age_nls::Encoding;
use anyhow::Result;
use clap::{Parser, Subcommand};

use batch::{Job, Mode};
use config::ToolConfig;

mod batch;
mod config;

#[derive(Parser, Debug)]
#[command(version, about = "AGE script disassembler and reassembler", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Codepage of generation 4 strings (sjis, gbk, gb18030, utf8)
    #[arg(short, long, global = true)]
    lang: Option<Encoding>,

    /// Worker threads for directory inputs
    #[arg(short, long, global = true)]
    jobs: Option<usize>,

    /// TOML file with defaults for the options above and the output directories
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Binary script(s) to text
    Disassemble {
        input: PathBuf,
        output: Option<PathBuf>,
    },
    /// Text script(s) back to binary
    Assemble {
        input: PathBuf,
        output: Option<PathBuf>,
    },
    /// Round-trip every script and report whether it reproduces the input
    Check { input: PathBuf },
}

fn run(args: Args) -> Result<bool> {
    let config = match &args.config {
        Some(path) => ToolConfig::new(path)?,
        None => ToolConfig::default(),
    };
    let settings = config.resolve(args.lang, args.jobs);

    let (mode, input, output, default_dir) = match args.command {
        Command::Disassemble { input, output } => {
            (Mode::Disassemble, input, output, settings.disassembly_dir)
        }
        Command::Assemble { input, output } => {
            (Mode::Assemble, input, output, settings.assembly_dir)
        }
        Command::Check { input } => (Mode::Check, input, None, PathBuf::new()),
    };
    batch::ensure_exists(&input)?;

    if !input.is_dir() {
        let jobs = batch::collect_jobs(mode, &input, output.as_deref(), &default_dir)?;
        let mut ok = true;
        for job in &jobs {
            ok &= batch::run_single(mode, job, &settings.options)?;
        }
        return Ok(ok);
    }

    let jobs: Vec<Job> = batch::collect_jobs(mode, &input, output.as_deref(), &default_dir)?;
    if jobs.is_empty() {
        log::warn!("no matching files in {}", input.display());
        return Ok(true);
    }
    let summary = batch::run(mode, &jobs, settings.jobs, &settings.options);
    if summary.failed > 0 {
        log::error!("{} of {} files failed", summary.failed, jobs.len());
    }
    if summary.different > 0 {
        log::error!("{} of {} files did not round-trip", summary.different, jobs.len());
    }
    Ok(summary.is_clean())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
