use std::fs::{self, File};
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use age_script::{assemble, disassemble, CodecOptions};
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Disassemble,
    Assemble,
    Check,
}

impl Mode {
    fn accepts(self, ext: &str) -> bool {
        match self {
            Mode::Disassemble => ext == "bin" || ext == "BIN",
            Mode::Assemble => ext == "txt" || ext == "TXT",
            Mode::Check => matches!(ext, "bin" | "BIN" | "txt" | "TXT"),
        }
    }

    fn output_extension(self) -> &'static str {
        match self {
            Mode::Disassemble => "txt",
            Mode::Assemble | Mode::Check => "BIN",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Mode::Disassemble => "Disassembly",
            Mode::Assemble => "Assembly",
            Mode::Check => "Check",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    /// Unused in check mode.
    pub output: PathBuf,
}

/// Files under `dir` (not recursive) that `mode` handles, skipping empty ones. Sorted by name so
/// runs are reproducible.
pub fn scan_dir(mode: Mode, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        let wanted = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| mode.accepts(e));
        if wanted && entry.metadata()?.is_file() && entry.metadata()?.len() > 0 {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Work list for one invocation. A file input maps to one job next to it (or to `output`); a
/// directory maps every matching file into `output`, or `default_dir` when none is given.
pub fn collect_jobs(
    mode: Mode,
    input: &Path,
    output: Option<&Path>,
    default_dir: &Path,
) -> Result<Vec<Job>> {
    let ext = mode.output_extension();
    if !input.is_dir() {
        let output = match output {
            Some(o) => o.to_path_buf(),
            None => input.with_extension(ext),
        };
        return Ok(vec![Job {
            input: input.to_path_buf(),
            output,
        }]);
    }

    let out_dir = output.unwrap_or(default_dir);
    if mode != Mode::Check {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("creating {}", out_dir.display()))?;
    }
    let jobs = scan_dir(mode, input)?
        .into_iter()
        .map(|input| {
            let mut output = out_dir.join(input.file_name().unwrap_or_default());
            output.set_extension(ext);
            Job { input, output }
        })
        .collect();
    Ok(jobs)
}

pub fn disassemble_file(input: &Path, output: &Path, options: &CodecOptions) -> Result<()> {
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("opening {}", input.display()))?,
    );
    let mut text = Vec::new();
    disassemble(reader, &mut text, options)
        .with_context(|| format!("disassembling {}", input.display()))?;
    fs::write(output, text).with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

pub fn assemble_file(input: &Path, output: &Path, options: &CodecOptions) -> Result<()> {
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("opening {}", input.display()))?,
    );
    let mut binary = Cursor::new(Vec::new());
    assemble(reader, &mut binary, options)
        .with_context(|| format!("assembling {}", input.display()))?;
    fs::write(output, binary.into_inner())
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

/// Convert a file to the other form and back, comparing against the original. `.bin` files are
/// compared byte for byte, `.txt` files as text.
pub fn check_file(input: &Path, options: &CodecOptions) -> Result<bool> {
    let original = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let is_binary = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("bin"));

    let back = if is_binary {
        let mut text = Vec::new();
        disassemble(Cursor::new(&original), &mut text, options)
            .with_context(|| format!("disassembling {}", input.display()))?;
        let mut binary = Cursor::new(Vec::new());
        assemble(text.as_slice(), &mut binary, options)
            .with_context(|| format!("reassembling {}", input.display()))?;
        binary.into_inner()
    } else {
        let mut binary = Cursor::new(Vec::new());
        assemble(original.as_slice(), &mut binary, options)
            .with_context(|| format!("assembling {}", input.display()))?;
        let mut text = Vec::new();
        disassemble(Cursor::new(binary.into_inner()), &mut text, options)
            .with_context(|| format!("disassembling {}", input.display()))?;
        text
    };
    Ok(back == original)
}

fn run_job(mode: Mode, job: &Job, options: &CodecOptions) -> Result<bool> {
    match mode {
        Mode::Disassemble => {
            log::info!(
                "Disassembling {} into {}",
                job.input.display(),
                job.output.display()
            );
            disassemble_file(&job.input, &job.output, options).map(|_| true)
        }
        Mode::Assemble => {
            log::info!(
                "Assembling {} into {}",
                job.input.display(),
                job.output.display()
            );
            assemble_file(&job.input, &job.output, options).map(|_| true)
        }
        Mode::Check => {
            let equal = check_file(&job.input, options)?;
            println!(
                "{}: {}",
                job.input.display(),
                if equal { "equal" } else { "different" }
            );
            Ok(equal)
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: usize,
    /// Check mode only: round trip did not reproduce the input.
    pub different: usize,
    pub failed: usize,
}

impl Summary {
    pub fn is_clean(&self) -> bool {
        self.different == 0 && self.failed == 0
    }
}

/// Run `jobs` on up to `workers` threads. Each worker claims the next job through a shared atomic
/// cursor. Failures are logged and counted; they never stop the other files.
pub fn run(mode: Mode, jobs: &[Job], workers: usize, options: &CodecOptions) -> Summary {
    let workers = workers.min(jobs.len()).max(1);
    let next = AtomicUsize::new(0);
    let succeeded = AtomicUsize::new(0);
    let different = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    let start = Instant::now();
    std::thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| loop {
                let idx = next.fetch_add(1, Ordering::Relaxed);
                let Some(job) = jobs.get(idx) else {
                    break;
                };
                match run_job(mode, job, options) {
                    Ok(true) => succeeded.fetch_add(1, Ordering::Relaxed),
                    Ok(false) => different.fetch_add(1, Ordering::Relaxed),
                    Err(e) => {
                        log::error!("{:#}", e);
                        failed.fetch_add(1, Ordering::Relaxed)
                    }
                };
            });
        }
    });

    log::info!(
        "{} took {:.3}s on {} workers",
        mode.verb(),
        start.elapsed().as_secs_f64(),
        workers
    );

    Summary {
        succeeded: succeeded.into_inner(),
        different: different.into_inner(),
        failed: failed.into_inner(),
    }
}

/// Single-file mode: no pool, and any error goes straight back to the caller.
pub fn run_single(mode: Mode, job: &Job, options: &CodecOptions) -> Result<bool> {
    let start = Instant::now();
    let result = run_job(mode, job, options)?;
    log::info!(
        "{} took {:.3}s",
        mode.verb(),
        start.elapsed().as_secs_f64()
    );
    Ok(result)
}

pub fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("{} does not exist", path.display());
    }
    Ok(())
}
