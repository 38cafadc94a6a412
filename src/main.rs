//! Fieldcheck CLI - Single-field String Validation
//!
//! Validates values from the command line, a file or stdin.

use anyhow::{bail, Context, Result};
use fieldcheck::prelude::*;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

/// Parsed command-line options shared by the commands.
#[derive(Debug, Default)]
struct Options {
    positional: Vec<String>,
    mode: Option<String>,
    json: bool,
    sequential: bool,
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("fieldcheck");

    if args.len() < 2 {
        print_usage(program);
        return ExitCode::from(2);
    }

    let outcome = match args[1].as_str() {
        "validate" => parse_options(&args[2..]).and_then(|opts| run_validate(&opts)),
        "batch" => parse_options(&args[2..]).and_then(|opts| run_batch(&opts)),
        "modes" => {
            list_modes();
            Ok(true)
        }
        "version" | "--version" | "-V" => {
            println!("{} v{}", fieldcheck::NAME, fieldcheck::VERSION);
            Ok(true)
        }
        "help" | "--help" | "-h" => {
            print_usage(program);
            Ok(true)
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(program);
            return ExitCode::from(2);
        }
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn print_usage(program: &str) {
    println!("Usage: {} <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  validate <input>        Validate a single value");
    println!("  batch <file|->          Validate one value per line");
    println!("  modes                   List the available modes");
    println!("  version                 Show the version");
    println!("  help                    Show this help message");
    println!();
    println!("Options:");
    println!("  --mode <mode>       Validation mode (default: text)");
    println!("  --json              Print results as JSON");
    println!("  --sequential        Validate batches on a single thread");
    println!("  --config <path>     Read settings from a TOML file");
    println!();
    println!("Environment:");
    println!("  FIELDCHECK_MODE, FIELDCHECK_FORMAT, FIELDCHECK_PARALLEL, RUST_LOG");
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" | "-m" => {
                let Some(mode) = args.get(i + 1) else {
                    bail!("--mode requires a value");
                };
                opts.mode = Some(mode.clone());
                i += 2;
            }
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config requires a path");
                };
                opts.config = Some(PathBuf::from(path));
                i += 2;
            }
            "--json" => {
                opts.json = true;
                i += 1;
            }
            "--sequential" => {
                opts.sequential = true;
                i += 1;
            }
            // Everything after `--` is positional, even if it looks like a flag
            "--" => {
                opts.positional.extend(args[i + 1..].iter().cloned());
                break;
            }
            _ => {
                opts.positional.push(args[i].clone());
                i += 1;
            }
        }
    }

    Ok(opts)
}

/// Merge the config file, environment and flags.
fn resolve(opts: &Options) -> Result<(Mode, OutputFormat, bool)> {
    let config = CliConfig::load(opts.config.as_deref()).context("Failed to load configuration")?;

    let mode = match &opts.mode {
        Some(tag) => Mode::parse(tag),
        None => config.mode(),
    };
    let format = if opts.json { OutputFormat::Json } else { config.format };
    let parallel = config.parallel && !opts.sequential;

    log::debug!("Resolved mode '{}', format {:?}, parallel {}", mode, format, parallel);
    Ok((mode, format, parallel))
}

fn print_result(result: &ValidationResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", result.to_json()?),
        OutputFormat::Text => match result {
            ValidationResult::Accepted { value } => println!("✓ {}", value),
            ValidationResult::Rejected { reason } => {
                println!("✗ {}", reason);
                if let Some(fix) = reason.suggested_fix() {
                    println!("   → Suggestion: {}", fix);
                }
            }
        },
    }
    Ok(())
}

fn run_validate(opts: &Options) -> Result<bool> {
    let input = match opts.positional.as_slice() {
        [input] => input,
        [] => bail!("validate requires an input value"),
        _ => bail!("validate takes exactly one input value; quote values containing spaces"),
    };
    let (mode, format, _) = resolve(opts)?;

    let validator = FieldValidator::new();
    let result = validator.validate(input, mode);
    print_result(&result, format)?;

    Ok(result.is_valid())
}

fn run_batch(opts: &Options) -> Result<bool> {
    let source = match opts.positional.as_slice() {
        [source] => source.as_str(),
        [] => "-",
        _ => bail!("batch takes a single file path or '-' for stdin"),
    };
    let (mode, format, parallel) = resolve(opts)?;

    let lines = read_lines(source)?;
    let validator = FieldValidator::new();
    let report = validate_batch(&validator, lines.as_slice(), mode, parallel);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        OutputFormat::Text => {
            for (line_no, result) in report.results.iter().enumerate() {
                match result {
                    ValidationResult::Accepted { value } => {
                        println!("{:>5}  ✓ {}", line_no + 1, value)
                    }
                    ValidationResult::Rejected { reason } => {
                        println!("{:>5}  ✗ {}", line_no + 1, reason)
                    }
                }
            }
            println!();
            println!("{}", report.summary());
            for (message, count) in &report.rejections {
                println!("   {:>5} × {}", count, message);
            }
        }
    }

    Ok(report.all_valid())
}

fn read_lines(source: &str) -> Result<Vec<String>> {
    let lines = if source == "-" {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read stdin")?
    } else {
        let file = std::fs::File::open(source)
            .with_context(|| format!("Failed to open input file '{}'", source))?;
        BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .with_context(|| format!("Failed to read input file '{}'", source))?
    };
    Ok(lines)
}

fn list_modes() {
    println!("Available modes ({} total):", Mode::ALL.len());
    println!();
    for grammar in Grammar::all() {
        let mode = grammar.mode();
        println!("  • {:<16} {}", mode.tag(), mode.description());
        println!("      {}", grammar.pattern());
    }
}
