//! lispy command line: REPL, file runner and token dump
//!
//! Usage: lispy [--max-depth N] [--tokens] [FILE]
//!
//! In the REPL, `:builtins` lists the built-ins and `:env` the bindings made
//! so far.
//!
//! Logging goes to stderr and is controlled by `LISPY_LOG`
//! (e.g. `LISPY_LOG=lispy=debug`).

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{bail, Context};
use lispy::parser::ParenStats;
use lispy::{tokenize, Evaluator, EvaluatorConfig};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "lispy> ";
const CONTINUATION_PROMPT: &str = "  ...> ";

struct Options {
    max_depth: Option<usize>,
    dump_tokens: bool,
    file: Option<String>,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut options = Options {
        max_depth: None,
        dump_tokens: false,
        file: None,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--max-depth" => {
                let value = args.next().context("--max-depth needs a value")?;
                let depth = value
                    .parse()
                    .with_context(|| format!("invalid --max-depth value '{}'", value))?;
                options.max_depth = Some(depth);
            }
            "--tokens" => options.dump_tokens = true,
            "-h" | "--help" => {
                println!("Usage: lispy [--max-depth N] [--tokens] [FILE]");
                process::exit(0);
            }
            flag if flag.starts_with('-') => bail!("unknown option '{}'", flag),
            _ if options.file.is_some() => bail!("only one FILE may be given"),
            path => options.file = Some(path.to_string()),
        }
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LISPY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let options = parse_args()?;

    let mut config = EvaluatorConfig::default();
    if let Some(depth) = options.max_depth {
        config = config.with_max_call_depth(depth);
    }

    match options.file {
        Some(path) => {
            let source = fs::read_to_string(&path)
                .with_context(|| format!("failed to read '{}'", path))?;

            if options.dump_tokens {
                let tokens = tokenize(&source);
                println!("{}", serde_json::to_string_pretty(&tokens)?);
                return Ok(());
            }

            let mut evaluator = Evaluator::with_config(config);
            match evaluator.load(&source) {
                Ok(value) => println!("{}", value),
                Err(err) => {
                    eprintln!("{}", err.diagnostic());
                    process::exit(1);
                }
            }
            Ok(())
        }
        None if options.dump_tokens => bail!("--tokens needs a FILE"),
        None => repl(Evaluator::with_config(config)),
    }
}

fn has_unclosed_parens(input: &str) -> bool {
    let stats = ParenStats::count(input);
    stats.open_count > stats.close_count
}

fn print_builtins(evaluator: &Evaluator) {
    let registry = evaluator.registry();
    println!("{} built-ins:", registry.count());
    for name in registry.list_tools() {
        if let Some(tool) = registry.get(&name) {
            println!("  {:<6} {}", name, tool.description());
        }
    }
}

fn print_bindings(evaluator: &Evaluator) {
    let names = evaluator.user_bindings();
    if names.is_empty() {
        println!("(no bindings)");
    }
    for name in names {
        if let Some(value) = evaluator.env.lookup(&name) {
            println!("  {} = {}", name, value);
        }
    }
}

fn repl(mut evaluator: Evaluator) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        print!("{}", PROMPT);
        stdout.flush()?;

        let mut input = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match input.trim() {
            "" => continue,
            "exit" | "quit" => break,
            ":builtins" => {
                print_builtins(&evaluator);
                continue;
            }
            ":env" => {
                print_bindings(&evaluator);
                continue;
            }
            _ => {}
        }

        while has_unclosed_parens(&input) {
            print!("{}", CONTINUATION_PROMPT);
            stdout.flush()?;
            match lines.next() {
                Some(line) => {
                    input.push('\n');
                    input.push_str(&line?);
                }
                None => break,
            }
        }

        match evaluator.evaluate(input.trim()) {
            Ok(value) => println!("-> {}", value),
            Err(err) => println!("{}", err.diagnostic()),
        }
    }

    println!();
    Ok(())
}
