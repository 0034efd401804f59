//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dig_inspect` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - JSON output of parsed responses
//!
//! All core functionality is implemented in the library crate.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use dig_inspect::config::{DEFAULT_DIG_BINARY, DEFAULT_RECORD_TYPE, LOOKUP_TIMEOUT_SECS};
use dig_inspect::initialization::{init_logger_with, init_resolver};
use dig_inspect::{
    parse_dig, parse_dig_all, run_lookup, Config, LogFormat, LogLevel, LookupError,
    ServerSelection,
};

/// Structured `dig` output with PTR and ASN enrichment.
#[derive(Debug, Parser)]
#[command(name = "dig_inspect", version, about)]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    log_format: LogFormat,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run dig for a name and print the parsed (and enriched) response
    Lookup {
        /// Domain name to query
        name: String,

        /// `default`, `authoritative`, or a server address
        #[arg(long, short, default_value = "default")]
        server: ServerSelection,

        /// Record type to query
        #[arg(long = "type", short = 't', default_value = DEFAULT_RECORD_TYPE)]
        record_type: String,

        /// Skip PTR and ASN lookups for address records
        #[arg(long)]
        no_enrich: bool,

        /// Path or name of the dig binary
        #[arg(long, default_value = DEFAULT_DIG_BINARY)]
        dig_binary: PathBuf,

        /// Per-invocation timeout in seconds
        #[arg(long, default_value_t = LOOKUP_TIMEOUT_SECS)]
        timeout: u64,
    },

    /// Parse saved dig output from a file (or `-` for stdin)
    Parse {
        /// Input file
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Print every HEADER-delimited block instead of only the last one
        #[arg(long)]
        all_blocks: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    let result = match cli.command {
        Command::Lookup {
            name,
            server,
            record_type,
            no_enrich,
            dig_binary,
            timeout,
        } => {
            let config = Config {
                name,
                server,
                record_type: record_type.to_ascii_uppercase(),
                enrich: !no_enrich,
                dig_binary,
                timeout_seconds: timeout,
            };
            lookup(&config, cli.pretty).await
        }
        Command::Parse { input, all_blocks } => parse(&input, all_blocks, cli.pretty),
    };

    if let Err(e) = result {
        eprintln!("dig_inspect error: {:#}", e);
        let code = match e.downcast_ref::<LookupError>() {
            Some(LookupError::InvalidDomain(_)) | Some(LookupError::Config(_)) => 2,
            _ => 1,
        };
        process::exit(code);
    }
    Ok(())
}

async fn lookup(config: &Config, pretty: bool) -> Result<()> {
    let resolver = init_resolver(config).context("Failed to initialize dig resolver")?;
    let response = run_lookup(config, resolver.as_ref()).await?;
    print_json(&response, pretty)
}

fn parse(input: &Path, all_blocks: bool, pretty: bool) -> Result<()> {
    let text = read_input(input)?;
    if all_blocks {
        let responses = parse_dig_all(&text)
            .with_context(|| format!("Failed to parse {}", input.display()))?;
        print_json(&responses, pretty)
    } else {
        let response =
            parse_dig(&text).with_context(|| format!("Failed to parse {}", input.display()))?;
        print_json(&response, pretty)
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize response")?;
    println!("{json}");
    Ok(())
}
