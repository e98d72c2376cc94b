use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::debug;

use splitshift::config::FileConfig;
use splitshift::pipeline::{self, PipelinePaths};
use splitshift::prompt::prompt_shifts;
use splitshift::utils::logger;
use splitshift::{Report, ShiftKeys, SplitShift};

mod cli;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    match dispatch(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the command succeeded (verification passed where one ran).
fn dispatch(cli: &Cli) -> Result<bool> {
    let file_layer = match &cli.config {
        Some(path) => FileConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FileConfig::default(),
    };
    let settings = file_layer.merge(cli.overrides());
    debug!(?settings, "resolved settings");

    match &cli.command {
        None | Some(Commands::Run { .. }) => {
            let keys = resolve_keys(&settings, cli)?;
            let paths = settings.paths();
            let report = pipeline::run(&paths, &keys).context("round trip failed")?;
            print_report(cli.json, &keys, &paths, &report)?;
            Ok(report.is_match())
        }
        Some(Commands::Encrypt { input, output }) => {
            let keys = resolve_keys(&settings, cli)?;
            let n = pipeline::encrypt_file(input, output, &keys)?;
            print_transfer(cli.json, "encrypt", input, output, n)?;
            Ok(true)
        }
        Some(Commands::Decrypt { input, output }) => {
            let keys = resolve_keys(&settings, cli)?;
            let n = pipeline::decrypt_file(input, output, &keys)?;
            print_transfer(cli.json, "decrypt", input, output, n)?;
            Ok(true)
        }
        Some(Commands::Verify { original, recovered }) => {
            let report = pipeline::verify_files(original, recovered)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let original = original.display().to_string();
                let recovered = recovered.display().to_string();
                println!("{}", report.describe(&original, &recovered));
            }
            Ok(report.is_match())
        }
        Some(Commands::Text { text }) => {
            let keys = resolve_keys(&settings, cli)?;
            let cipher = SplitShift::with_keys(keys);
            let encrypted = cipher.encrypt(text);
            let decrypted = cipher.decrypt(&encrypted);
            let report = splitshift::verify(text, &decrypted);
            if cli.json {
                let out = json!({
                    "keys": keys,
                    "encrypted": encrypted,
                    "decrypted": decrypted,
                    "report": report,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Encrypted: {encrypted}");
                println!("Decrypted: {decrypted}");
                println!("{report}");
            }
            Ok(report.is_match())
        }
    }
}

/// Takes keys from flags or config, prompting when both are absent. Prompts
/// go to stderr under `--json` so stdout stays a single JSON document.
fn resolve_keys(settings: &FileConfig, cli: &Cli) -> Result<ShiftKeys> {
    if let Some(keys) = settings.keys() {
        return Ok(keys);
    }
    if cli.no_prompt {
        bail!("--shift1 and --shift2 are required when prompting is disabled");
    }
    let stdin = io::stdin();
    let keys = if cli.json {
        prompt_shifts(&mut stdin.lock(), &mut io::stderr())?
    } else {
        prompt_shifts(&mut stdin.lock(), &mut io::stdout())?
    };
    Ok(keys)
}

fn print_report(
    as_json: bool,
    keys: &ShiftKeys,
    paths: &PipelinePaths,
    report: &Report,
) -> Result<()> {
    if as_json {
        let out = json!({
            "keys": keys,
            "raw": paths.raw,
            "encrypted": paths.encrypted,
            "decrypted": paths.decrypted,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!(
        "[1] Encrypted: '{}' -> '{}'",
        paths.raw.display(),
        paths.encrypted.display()
    );
    println!(
        "[2] Decrypted: '{}' -> '{}'",
        paths.encrypted.display(),
        paths.decrypted.display()
    );
    let raw = paths.raw.display().to_string();
    let decrypted = paths.decrypted.display().to_string();
    println!("[3] {}", report.describe(&raw, &decrypted));
    Ok(())
}

fn print_transfer(
    as_json: bool,
    action: &str,
    input: &Path,
    output: &Path,
    chars: usize,
) -> Result<()> {
    if as_json {
        let out = json!({
            "action": action,
            "input": input,
            "output": output,
            "chars": chars,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{action}: '{}' -> '{}' ({chars} characters)",
            input.display(),
            output.display()
        );
    }
    Ok(())
}
