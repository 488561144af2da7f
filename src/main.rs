use std::{
    env,
    fs::read_to_string,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use gero::{
    display_error, display_parser_errors, dump_program, lexer::lexer::tokenize,
    parser::parser::parse, repl,
};

#[derive(Parser, Debug)]
#[command(name = "gero", version, about = "Tokenizes and parses Gero source into a syntax tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Starts the interactive shell (the default)
    Repl,
    /// Parses the file at the given path and prints its syntax tree
    Run {
        #[arg(required = true)]
        path: PathBuf,
        /// Prints how long parsing took to stderr
        #[arg(long)]
        timings: bool,
    },
    /// Prints the token stream of the file at the given path
    Tokens {
        #[arg(required = true)]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => start_repl(),
        Commands::Run { path, timings } => run(&path, timings),
        Commands::Tokens { path } => dump_tokens(&path),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", format!("io error: {}", error).red());
            ExitCode::FAILURE
        }
    }
}

fn start_repl() -> io::Result<ExitCode> {
    let user = env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("stranger"));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::start(stdin.lock(), &mut stdout, &user)?;

    Ok(ExitCode::SUCCESS)
}

fn run(path: &Path, timings: bool) -> io::Result<ExitCode> {
    let Some(source) = read_source(path) else {
        return Ok(ExitCode::FAILURE);
    };

    let start = Instant::now();
    let parsed = parse(&source);

    if timings {
        eprintln!("Parsed in {:?}", start.elapsed());
    }

    let mut out = io::stdout().lock();

    match parsed {
        Ok((program, errors)) => {
            if !errors.is_empty() {
                display_parser_errors(&mut out, &errors)?;
            }

            writeln!(out, "{}", dump_program(&program)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            display_error(&mut out, &error, &file_name(path), &source)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn dump_tokens(path: &Path) -> io::Result<ExitCode> {
    let Some(source) = read_source(path) else {
        return Ok(ExitCode::FAILURE);
    };

    let mut out = io::stdout().lock();

    match tokenize(&source) {
        Ok(tokens) => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            display_error(&mut out, &error, &file_name(path), &source)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_source(path: &Path) -> Option<String> {
    if !path.exists() {
        eprintln!("{}", format!("invalid filepath. got={:?}", path.display().to_string()).red());
        return None;
    }

    match read_to_string(path) {
        Ok(source) => Some(source),
        Err(error) => {
            eprintln!("{}", format!("cannot read file {:?}: {}", path.display().to_string(), error).red());
            None
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
