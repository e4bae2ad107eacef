use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, error, trace};

use caesar_cipher_tool::{repl, transform, Config, Direction, Error, Session};

/// Encrypt and decrypt text with a Caesar shift cipher
#[derive(Parser)]
#[command(name = "caesar", version)]
#[command(about = "Caesar cipher tool - shift letters to encrypt or decrypt text", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift letters forward
    Encrypt(TransformArgs),
    /// Shift letters back
    Decrypt(TransformArgs),
    /// Edit a message and transform it line by line from stdin
    Interactive,
}

#[derive(Args)]
struct TransformArgs {
    /// Number of alphabet positions to shift (must be non-negative)
    #[arg(short, long, allow_negative_numbers = true)]
    shift: Option<i64>,

    /// Text to transform; read from stdin when omitted
    text: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(cli.verbose >= 2)
        .with_line_number(cli.verbose >= 3)
        .init();

    debug!("caesar started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")
        .and_then(|config| match cli.command {
            Commands::Encrypt(args) => run_transform(&config, args, Direction::Encrypt),
            Commands::Decrypt(args) => run_transform(&config, args, Direction::Decrypt),
            Commands::Interactive => run_interactive(&config),
        });

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_transform(config: &Config, args: TransformArgs, direction: Direction) -> anyhow::Result<()> {
    let shift = args.shift.unwrap_or(config.default_shift);
    if shift < 0 {
        return Err(Error::NegativeShift(shift).into());
    }
    debug!("Running {} with shift {}", direction, shift);

    let encrypt = direction == Direction::Encrypt;
    let mut stdout = io::stdout().lock();
    match args.text {
        Some(text) => writeln!(stdout, "{}", transform(&text, shift, encrypt))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            write!(stdout, "{}", transform(&input, shift, encrypt))?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new(config.default_shift);
    repl::run(&mut session, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
