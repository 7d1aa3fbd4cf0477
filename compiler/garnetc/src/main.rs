//! Garnet Compiler CLI
//!
//! Inspection commands for the C++ backend.

mod commands;

use std::sync::Once;

use commands::{check_template, list_modules, parse_required, reindent_file, ModulesOptions};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=garnet_cpp=debug`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "modules" => {
            let mut options = ModulesOptions::default();
            for arg in args.iter().skip(2) {
                if let Some(spec) = arg.strip_prefix("--require=") {
                    match parse_required(spec) {
                        Some((name, path)) => options.required.push((name, path)),
                        None => {
                            eprintln!("error: expected --require=<name>=<path>, got `{arg}`");
                            std::process::exit(1);
                        }
                    }
                } else if !arg.starts_with('-') && options.lib_root.is_none() {
                    options.lib_root = Some(arg.into());
                }
            }
            list_modules(&options)
        }
        "check-template" => {
            if args.len() < 3 {
                eprintln!("Usage: garnetc check-template <template.cpp>");
                std::process::exit(1);
            }
            check_template(args[2].as_ref())
        }
        "reindent" => {
            if args.len() < 3 {
                eprintln!("Usage: garnetc reindent <file.cpp>");
                std::process::exit(1);
            }
            reindent_file(args[2].as_ref())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Garnet Compiler");
    println!();
    println!("Usage: garnetc <command> [options]");
    println!();
    println!("Commands:");
    println!("  modules [lib-root]         Print library module link order and init calls");
    println!("  check-template <file>      Validate runtime template markers");
    println!("  reindent <file>            Print a C++ file re-indented by brace depth");
    println!("  help                       Show this help message");
    println!();
    println!("Options for modules:");
    println!("  --require=<name>=<path>    Append a required module (repeatable)");
    println!();
    println!("Environment:");
    println!(
        "  {}            Library root when none is given (default: src)",
        garnet_cpp::LIB_ROOT_ENV
    );
    println!("  RUST_LOG                   Enable debug logging, e.g. garnet_cpp=debug");
}
