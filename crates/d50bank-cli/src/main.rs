use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use glob::glob;

use d50bank_core::{BankListing, ChecksumPolicy};

mod dump;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("D50BANK_BUILD_COMMIT"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "d50bank")]
#[command(version = VERSION)]
#[command(
    about = "Convert Roland D-50 patch banks between hardware SysEx dumps (.syx) and software-synth bank files (.bin).",
    long_about = None,
    after_help = "Examples:\n  d50bank -i bank.syx -o bank.bin\n  d50bank -i bank.bin -o bank.syx --listing names.json\n  d50bank -i bank.syx -o bank.bin --strict --dump dump_syx.txt"
)]
struct Cli {
    /// Input bank file (.syx or .bin; glob patterns resolve to a single file)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output bank file (.bin for a .syx input, .syx for a .bin input)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Fail on per-message checksum mismatches when reading SysEx
    #[arg(long)]
    strict: bool,

    /// Write a diagnostic hex dump of the input stream
    #[arg(long, value_name = "PATH")]
    dump: Option<PathBuf>,

    /// Write the bank listing (patch names and key modes) as JSON
    #[arg(long, value_name = "PATH")]
    listing: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    SyxToBin,
    BinToSyx,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Missing arguments get a usage message and a zero exit, not a failure.
    let (input, output) = match (cli.input, cli.output) {
        (Some(input), Some(output)) => (input, output),
        (None, _) => {
            eprintln!("No input file specified");
            eprintln!("Usage: d50bank -i <input> -o <output>");
            return ExitCode::SUCCESS;
        }
        (_, None) => {
            eprintln!("No output file specified");
            eprintln!("Usage: d50bank -i <input> -o <output>");
            return ExitCode::SUCCESS;
        }
    };

    match run(&input, &output, cli.strict, cli.dump, cli.listing, cli.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn run(
    input: &Path,
    output: &Path,
    strict: bool,
    dump: Option<PathBuf>,
    listing: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let input = resolve_input_path(input)?;
    let direction = infer_direction(&input, output)?;

    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .syx or .bin bank file".to_string()),
        ));
    }

    let bytes = fs::read(&input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    if let Some(dump_path) = dump {
        let text = match direction {
            Direction::SyxToBin => dump::dump_syx(&bytes),
            Direction::BinToSyx => dump::dump_bin(&bytes),
        };
        fs::write(&dump_path, text)
            .with_context(|| format!("Failed to write dump: {}", dump_path.display()))?;
    }

    let policy = if strict {
        ChecksumPolicy::Verify
    } else {
        ChecksumPolicy::Ignore
    };

    let (converted, bank_listing) = match direction {
        Direction::SyxToBin => {
            let records = d50bank_core::read_syx_bank(&bytes, policy)
                .context("SysEx bank conversion failed")?;
            let listing =
                d50bank_core::syx_bank_listing(&records).context("bank listing failed")?;
            let converted =
                d50bank_core::write_bin_bank(&records).context("SysEx bank conversion failed")?;
            (converted, listing)
        }
        Direction::BinToSyx => {
            let records =
                d50bank_core::read_bin_bank(&bytes).context("bin bank conversion failed")?;
            let listing = d50bank_core::bin_bank_listing(&records);
            (d50bank_core::write_syx_bank(&records), listing)
        }
    };

    if !quiet {
        print_listing(&bank_listing);
    }
    if let Some(listing_path) = listing {
        let json =
            serde_json::to_string_pretty(&bank_listing).context("JSON serialization failed")?;
        fs::write(&listing_path, json)
            .with_context(|| format!("Failed to write listing: {}", listing_path.display()))?;
    }

    fs::write(output, converted)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    if !quiet {
        eprintln!("OK: bank written -> {}", output.display());
    }
    Ok(())
}

fn print_listing(listing: &BankListing) {
    for entry in &listing.patches {
        println!("Patch {}: {}", entry.slot, entry.name);
    }
}

fn infer_direction(input: &Path, output: &Path) -> Result<Direction, CliError> {
    let input_ext = extension_of(input);
    let output_ext = extension_of(output);
    match (input_ext.as_str(), output_ext.as_str()) {
        ("syx", "bin") => Ok(Direction::SyxToBin),
        ("bin", "syx") => Ok(Direction::BinToSyx),
        _ => Err(CliError::new(
            format!(
                "unsupported extension pairing: {} -> {}",
                input.display(),
                output.display()
            ),
            Some("expected .syx -> .bin or .bin -> .syx".to_string()),
        )),
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .syx or .bin file".to_string()),
        ));
    }
    if matches.len() > 1 {
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches)",
                pattern,
                matches.len()
            ),
            Some("pass a single bank file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
