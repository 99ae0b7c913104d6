use anyhow::Context;
use clap::Parser;
use ferrous_numaddr_domain::{CliOverrides, OutputFormat};
use std::io::{BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, info, warn};

mod bootstrap;
mod report;

use report::AddressReport;

#[derive(Parser)]
#[command(name = "numaddr")]
#[command(version)]
#[command(about = "Classify and parse numeric IPv4/IPv6 literals without DNS lookups")]
struct Cli {
    /// Addresses to classify; read one per line from stdin when omitted
    addresses: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Output format (text, json)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Exit with status 1 when any input is not numeric
    #[arg(long)]
    strict: bool,

    /// Omit the canonical rendering from the report
    #[arg(long)]
    no_canonical: bool,
}

fn read_stdin() -> anyhow::Result<Vec<String>> {
    std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read addresses from stdin")
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        format: cli.format,
        canonical: cli.no_canonical.then_some(false),
        strict: cli.strict.then_some(true),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    debug!(
        format = %config.output.format,
        canonical = config.output.canonical,
        strict = config.output.strict,
        "Configuration loaded"
    );

    let inputs = if cli.addresses.is_empty() {
        debug!("No addresses given, reading stdin");
        read_stdin()?
    } else {
        cli.addresses
    };

    let reports: Vec<AddressReport> = inputs.iter().map(|s| AddressReport::classify(s)).collect();
    let rejected = reports.iter().filter(|r| !r.numeric).count();
    info!(total = reports.len(), rejected, "Classified numeric addresses");

    let rendered = match config.output.format {
        OutputFormat::Text => report::render_text(&reports, config.output.canonical),
        OutputFormat::Json => {
            let mut json = report::render_json(&reports, config.output.canonical)
                .context("Failed to serialize report")?;
            json.push('\n');
            json
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write report")?;

    if config.output.strict && rejected > 0 {
        warn!(rejected, "Non-numeric input under --strict");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
