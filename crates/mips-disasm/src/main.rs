use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use mips_disasm::{labels_kv, Report};
use mips_rs::{AsciiWords, BinaryWords, DisasmConfig, Disassembler};

#[derive(Parser, Debug)]
#[command(author, version, about = "A toy MIPS disassembler", long_about = None)]
struct Cli {
    /// Base address of the first word (e.g. 0x10000000)
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    base: u32,
    /// Input is text: hex words separated by whitespace
    #[arg(long)]
    ascii: bool,
    /// Fail on words outside the supported instruction subset
    #[arg(long)]
    strict: bool,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Export labels to JSON (Vec<{ addr, name }>)
    #[arg(long, value_name = "FILE")]
    labels_out: Option<PathBuf>,
    /// Input file
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = DisasmConfig { base: cli.base, strict: cli.strict };
    debug!(?cfg, input = %cli.input.display(), ascii = cli.ascii, "disassembling");
    let mut dis = Disassembler::new(cfg);

    {
        let path = &cli.input;
        let file = File::open(path)
            .with_context(|| format!("failed to open input file {}", path.display()))?;
        if cli.ascii {
            dis.decode(&mut AsciiWords::new(BufReader::new(file)))?;
        } else {
            dis.decode(&mut BinaryWords::new(file))?;
        }
    }
    let listing = dis.listing()?;

    let rendered = match cli.format {
        OutputFormat::Text => listing.to_string(),
        OutputFormat::Json => {
            let report = Report::new(cfg.base, dis.labels(), &listing);
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
    };
    match &cli.out {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    if let Some(path) = &cli.labels_out {
        let json = serde_json::to_string_pretty(&labels_kv(dis.labels()))?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return ExitCode::SUCCESS;
            }
            _ => {
                let _ = err.print();
                println!("{}", Cli::command().render_usage());
                return ExitCode::from(1);
            }
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fatal: {e:#}");
            ExitCode::from(1)
        }
    }
}
