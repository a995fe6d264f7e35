//! Pascal validator CLI
//!
//! Usage: pascal_validator [code.pas] [--dump-symbols] [--dump-ast]

use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use pascal_validator::{display_error, validate_program};

#[derive(Parser, Debug)]
#[command(name = "pascal_validator")]
#[command(version = "0.1.0")]
#[command(about = "Builds the symbol table of a Pascal-like program and type checks its statements", long_about = None)]
struct Args {
    /// Program to validate
    #[arg(value_name = "INPUT", default_value = "code.pas")]
    input: PathBuf,

    /// Print the symbol table
    #[arg(long, default_value_t = false)]
    dump_symbols: bool,

    /// Print each statement's AST and type
    #[arg(long, default_value_t = false)]
    dump_ast: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| args.input.to_string_lossy().to_string());

    let source = match read_to_string(&args.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading file {}: {}", args.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let validation = validate_program(&source, Some(file_name));
    println!("Validated in {:?}", start.elapsed());

    let validation = match validation {
        Ok(validation) => validation,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FAILURE;
        }
    };

    if args.dump_symbols {
        println!("Symbol Table:");
        for (name, declared_type) in validation.symbol_table.sorted() {
            println!("  {}: {}", name, declared_type);
        }
    }

    if args.dump_ast {
        for statement in &validation.statements {
            println!("{}", statement.instruction.text);
            println!("  AST: {}", statement.ast);
            println!("  Type: {}", statement.value_type);
        }
    }

    println!("Validation passed: no errors.");
    ExitCode::SUCCESS
}
