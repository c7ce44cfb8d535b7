use std::path::{Path, PathBuf};

use age_nls::Encoding;
use age_script::CodecOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Optional `--config` file. Command-line flags win over anything set here.
///
/// ```toml
/// lang = "gbk"
/// jobs = 8
/// disassembly_dir = "out/txt"
/// assembly_dir = "out/bin"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    #[serde(flatten)]
    pub codec: CodecOptions,
    pub jobs: Option<usize>,
    pub disassembly_dir: Option<PathBuf>,
    pub assembly_dir: Option<PathBuf>,
}

impl ToolConfig {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ToolConfig = toml::from_str(&config_str)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Merge with command-line overrides.
    pub fn resolve(self, lang: Option<Encoding>, jobs: Option<usize>) -> Settings {
        let encoding = lang.unwrap_or(self.codec.encoding);
        let jobs = jobs.or(self.jobs).unwrap_or_else(default_jobs).max(1);

        Settings {
            options: CodecOptions::new(encoding),
            jobs,
            disassembly_dir: self
                .disassembly_dir
                .unwrap_or_else(|| PathBuf::from("decompiled")),
            assembly_dir: self.assembly_dir.unwrap_or_else(|| PathBuf::from("compiled")),
        }
    }
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .max(4)
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub options: CodecOptions,
    /// Upper bound on workers; the pool never exceeds the number of files.
    pub jobs: usize,
    pub disassembly_dir: PathBuf,
    pub assembly_dir: PathBuf,
}
