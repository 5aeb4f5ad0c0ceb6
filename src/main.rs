//! CLI tool to translate BASIC programs to C and inspect their tokens.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Largest source file accepted, in bytes.
const MAX_SOURCE_BYTES: u64 = 3 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "basic2c", version, about = "Translate tiny BASIC programs to C")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a program and print the C source
    Translate {
        file: PathBuf,
        /// Write the C source to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the token listing of a program
    Tokens { file: PathBuf },
    /// Check that programs scan and translate cleanly
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ok = match cli.command {
        Command::Translate { file, output } => translate(&file, output.as_deref()),
        Command::Tokens { file } => tokens(&file),
        Command::Check { files } => files.iter().fold(true, |ok, file| check(file) && ok),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn translate(path: &Path, output: Option<&Path>) -> bool {
    let Some(content) = load_source(path) else {
        return false;
    };

    let program = match basic2c::translate_str(&content) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            return false;
        }
    };

    match output {
        Some(out) => {
            if let Err(e) = fs::write(out, program) {
                eprintln!("{}: {e}", out.display());
                return false;
            }
        }
        None => print!("{program}"),
    }
    true
}

fn tokens(path: &Path) -> bool {
    let Some(content) = load_source(path) else {
        return false;
    };

    match basic2c::scan(&content) {
        Ok(tokens) => {
            print!("{}", basic2c::enumerate(&tokens));
            true
        }
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            false
        }
    }
}

fn check(path: &Path) -> bool {
    let Some(content) = load_source(path) else {
        return false;
    };

    let result = basic2c::scan(&content)
        .map_err(basic2c::Error::from)
        .and_then(|tokens| {
            let program = basic2c::translate(&tokens)?;
            Ok((tokens.len(), program.lines().count()))
        });

    match result {
        Ok((token_count, line_count)) => {
            eprintln!(
                "{}: ok ({token_count} token(s), {line_count} line(s) of C)",
                path.display()
            );
            true
        }
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            false
        }
    }
}

/// Read a source file, rejecting empty and oversized inputs.
fn load_source(path: &Path) -> Option<String> {
    let size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            return None;
        }
    };

    if size > MAX_SOURCE_BYTES {
        eprintln!("{}: input file too large (> 3 MiB)", path.display());
        return None;
    }
    if size == 0 {
        eprintln!("{}: input file empty", path.display());
        return None;
    }

    match fs::read_to_string(path) {
        Ok(c) => Some(c),
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            None
        }
    }
}
