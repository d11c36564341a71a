use clap::{ArgAction, Parser};
use engine::{process_args, Character, Dice};
use std::{path::PathBuf, process::ExitCode};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "roller")]
#[command(about = "Roll checks, saves and attacks for a character file")]
struct Cli {
    /// Character file, one `trait:value` pair per line
    #[arg(short, long, default_value = "character.txt")]
    character: PathBuf,
    /// RNG seed for determinism (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,
    /// Print the resolution as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Command, e.g. `con save adv`, `attack dex dis`, `damage`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut dice = match cli.seed {
        Some(seed) => Dice::from_seed(seed),
        None => Dice::from_entropy(),
    };
    debug!(character = %cli.character.display(), seed = ?cli.seed, "starting");

    let resolution = process_args(cli.tokens.as_slice(), || Character::load(&cli.character), &mut dice)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{}", resolution);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("warning: {e}");
    }
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
