//! longhand CLI

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use longhand::error::report_error;
use longhand::{Config, OutputFormat, Width, parse_longhand};

#[derive(Parser)]
#[command(name = "longhand", version, about = "Parse English number phrases into integers")]
struct Cli {
    /// Config file (defaults to $LONGHAND_CONFIG, then ./longhand.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct OutputArgs {
    /// Integer width to parse into
    #[arg(long, global = true, value_enum)]
    width: Option<Width>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colour in error reports
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a phrase given as arguments
    Parse {
        /// Words of the phrase
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Tokenize a phrase and dump its words (debug)
    Tokens {
        /// Words of the phrase
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Parse every non-blank line of a file
    Check {
        /// File with one phrase per line
        file: PathBuf,
    },
    /// Start an interactive session
    Repl,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli);

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when a phrase was rejected
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(width) = cli.output.width {
        config.width = width;
    }
    if cli.output.json {
        config.format = OutputFormat::Json;
    }
    if cli.output.no_color {
        config.color = false;
    }

    match cli.command {
        Command::Parse { words } => Ok(parse_phrase(&words.join(" "), &config)?),
        Command::Tokens { words } => {
            tokenize_phrase(&words.join(" "))?;
            Ok(true)
        }
        Command::Check { file } => check_file(&file, &config),
        Command::Repl => {
            let mut repl = longhand::repl::Repl::new(&config)?;
            repl.run()?;
            Ok(true)
        }
    }
}

fn parse_phrase(phrase: &str, config: &Config) -> serde_json::Result<bool> {
    let result = parse_longhand(phrase, config.width);
    print_result("<args>", phrase, &result, config, false)?;
    Ok(result.is_ok())
}

fn tokenize_phrase(phrase: &str) -> longhand::Result<()> {
    let tokens = longhand::lexer::tokenize(phrase)?;
    for (tok, span) in &tokens {
        println!("{:?} @ {}..{}", tok.as_str(), span.start, span.end);
    }
    Ok(())
}

fn check_file(path: &Path, config: &Config) -> Result<bool, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();

    let mut all_ok = true;
    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let name = format!("{}:{}", filename, index + 1);
        let result = parse_longhand(line, config.width);
        all_ok &= result.is_ok();
        print_result(&name, line, &result, config, true)?;
    }

    tracing::debug!("checked {}", filename);
    Ok(all_ok)
}

fn print_result(
    name: &str,
    phrase: &str,
    result: &longhand::Result<i64>,
    config: &Config,
    show_name: bool,
) -> serde_json::Result<()> {
    match config.format {
        OutputFormat::Json => {
            let value = match result {
                Ok(value) => serde_json::json!({ "input": name, "phrase": phrase, "value": value }),
                Err(err) => serde_json::json!({ "input": name, "phrase": phrase, "error": err }),
            };
            println!("{}", serde_json::to_string(&value)?);
        }
        OutputFormat::Text => match result {
            Ok(value) if show_name => println!("{name}: {value}"),
            Ok(value) => println!("{value}"),
            Err(err) => report_error(name, phrase, err, config.color),
        },
    }
    Ok(())
}
