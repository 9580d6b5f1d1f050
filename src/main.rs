use std::io::IsTerminal;

use clap::Parser;
use tracing::Level;
use whodat::report::render_error;
use whodat::{classify, run_whodat, Config, Lookup, Options};

#[derive(Parser)]
#[command(name = "whodat")]
#[command(about = "Quickly get IP, Prefix, and ASN Information at the command-line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// IP address, CIDR prefix, or ASN (e.g. 1.1.1.1, 1.1.1.0/24, AS13335)
    query: String,

    /// Get ASN's advertised prefixes
    #[arg(short, long)]
    prefixes: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    debug: bool,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let query = classify(&cli.query)?;
    let config = Config::from_env()?;
    let lookup = Lookup::new(&config);

    let options = Options {
        prefixes: cli.prefixes,
        json: cli.json,
    };

    let stdout = std::io::stdout();
    run_whodat(&lookup, &query, options, &mut stdout.lock())
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    if cli.no_color || cli.json || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        let color = !cli.no_color && std::io::stderr().is_terminal();
        eprintln!("{}", render_error(&format!("{e:#}"), color));
        std::process::exit(1);
    }
}
