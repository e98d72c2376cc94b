use std::path::PathBuf;

use clap::{Parser, Subcommand};

use splitshift::config::FileConfig;
use splitshift::ShiftKeys;

#[derive(Parser, Debug)]
#[command(
    name = "splitshift",
    version,
    about = "Encrypt, decrypt and verify text with a keyed half-alphabet substitution"
)]
pub struct Cli {
    #[arg(long, global = true, allow_negative_numbers = true, help = "First shift key")]
    pub shift1: Option<i64>,
    #[arg(long, global = true, allow_negative_numbers = true, help = "Second shift key")]
    pub shift2: Option<i64>,
    #[arg(
        long,
        global = true,
        allow_hyphen_values = true,
        help = "Both keys as 'shift1,shift2'; individual flags win"
    )]
    pub keys: Option<ShiftKeys>,
    #[arg(long, global = true, help = "TOML config file")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Fail instead of prompting for missing keys")]
    pub no_prompt: bool,
    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,
    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt the raw file, decrypt it back and verify (default)
    Run {
        #[arg(long, help = "Directory holding the three pipeline files")]
        base_dir: Option<PathBuf>,
        #[arg(long)]
        raw: Option<PathBuf>,
        #[arg(long)]
        encrypted: Option<PathBuf>,
        #[arg(long)]
        decrypted: Option<PathBuf>,
    },
    /// Encrypt one file
    Encrypt { input: PathBuf, output: PathBuf },
    /// Decrypt one file
    Decrypt { input: PathBuf, output: PathBuf },
    /// Compare an original file with its recovered form
    Verify { original: PathBuf, recovered: PathBuf },
    /// Round-trip a string in memory
    Text { text: String },
}

impl Cli {
    /// Flag values expressed as a config layer.
    pub fn overrides(&self) -> FileConfig {
        let mut layer = FileConfig {
            shift1: self.shift1.or(self.keys.map(|k| k.shift1)),
            shift2: self.shift2.or(self.keys.map(|k| k.shift2)),
            ..Default::default()
        };
        if let Some(Commands::Run {
            base_dir,
            raw,
            encrypted,
            decrypted,
        }) = &self.command
        {
            layer.base_dir = base_dir.clone();
            layer.raw = raw.clone();
            layer.encrypted = encrypted.clone();
            layer.decrypted = decrypted.clone();
        }
        layer
    }
}
