//! Action Replay Runner
//!
//! Reads a JSON list of decoded actions from stdin or a file, applies them
//! to an in-memory buffer through the adapter and prints the resulting
//! buffer state.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use term_adapter::config::Config;
use term_adapter::core::{ScreenBuffer, Snapshot};
use term_adapter::{dispatch_all, Action, Terminal};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let mut cols: Option<u16> = None;
    let mut rows: Option<u16> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut input_file: Option<String> = None;
    let mut output_format = OutputFormat::Text;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--cols" => {
                i += 1;
                cols = parse_dimension("--cols", args.get(i).map(String::as_str));
            }
            "-r" | "--rows" => {
                i += 1;
                rows = parse_dimension("--rows", args.get(i).map(String::as_str));
            }
            "--config" => {
                i += 1;
                config_file = args.get(i).map(PathBuf::from);
            }
            "-f" | "--file" => {
                i += 1;
                input_file = args.get(i).cloned();
            }
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            }
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            }
            "-h" | "--help" => {
                show_help = true;
            }
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                }
            }
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let mut config = match &config_file {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    if let Some(cols) = cols {
        config.columns = cols;
    }
    if let Some(rows) = rows {
        config.rows = rows;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Read input
    let input = match &input_file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut data = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut data) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            data
        }
    };

    let actions: Vec<Action> = match serde_json::from_str(&input) {
        Ok(actions) => actions,
        Err(e) => {
            eprintln!("Error parsing actions: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let buffer = ScreenBuffer::new(usize::from(config.columns), usize::from(config.rows));
    let mut terminal = Terminal::new(buffer, config.viewport()).with_title(config.title.clone());
    terminal.set_title_changed_callback(|title| eprintln!("title: {}", title));

    tracing::info!(
        actions = actions.len(),
        cols = config.columns,
        rows = config.rows,
        "replaying actions"
    );
    let status = match dispatch_all(&mut terminal, &actions) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("replay stopped: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    };

    let snapshot = Snapshot::from_buffer(terminal.buffer(), terminal.title());
    match output_format {
        OutputFormat::Text => {
            println!("Buffer State ({}x{}):", snapshot.cols, snapshot.rows);
            println!("Cursor: {}", snapshot.cursor);
            println!("Title: {}", snapshot.title);
            println!("---");
            for line in &snapshot.text {
                println!("{}", line);
            }
            println!("---");
        }
        OutputFormat::Json => match snapshot.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    status
}

/// Parse a size flag's value, warning on stderr when it is missing or invalid
fn parse_dimension(flag: &str, value: Option<&str>) -> Option<u16> {
    match value.map(str::parse::<u16>) {
        Some(Ok(n)) => Some(n),
        Some(Err(e)) => {
            eprintln!(
                "Warning: ignoring {} value '{}': {}",
                flag,
                value.unwrap_or_default(),
                e
            );
            None
        }
        None => {
            eprintln!("Warning: {} expects a value", flag);
            None
        }
    }
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn print_help() {
    println!("Terminal Action Replay Runner");
    println!();
    println!("Usage: term-adapter-replay [OPTIONS] [SCRIPT]");
    println!();
    println!("Options:");
    println!("  -c, --cols <N>       Set buffer width (default: 80)");
    println!("  -r, --rows <N>       Set buffer height (default: 24)");
    println!("      --config <PATH>  Load session config (JSON)");
    println!("  -f, --file <PATH>    Read actions from file");
    println!("  -j, --json           Output snapshot as JSON");
    println!("  -t, --text           Output snapshot as text (default)");
    println!("  -h, --help           Show this help message");
    println!();
    println!("If no script is specified, reads a JSON action list from stdin.");
    println!();
    println!("Examples:");
    println!("  echo '[{{\"action\":\"print_string\",\"text\":\"hi\"}}]' | term-adapter-replay");
    println!("  term-adapter-replay --json -c 120 -r 40 session.json");
}
