use std::io::{self, BufRead, Write};

use clap::Parser;
use prioricalc::evaluate;

/// prioricalc evaluates arithmetic expressions with `+ - * /` and
/// parentheses, applying the usual operator precedence.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text shown before reading an expression.
    #[arg(short, long, default_value = "Enter an expression: ")]
    prompt: String,

    /// Keeps reading expressions until the end of input instead of stopping
    /// after the first one.
    #[arg(short, long)]
    repeat: bool,

    /// Evaluates this expression instead of reading one from standard input.
    expression: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(expression) = &args.expression {
        println!("{}", evaluate(expression.trim()));
        return;
    }

    let mut input = io::stdin().lock();

    loop {
        match read_expression(&mut input, &args.prompt) {
            Ok(Some(line)) => {
                if args.repeat && line.is_empty() {
                    continue;
                }
                println!("{}", evaluate(&line));
            },
            Ok(None) => break,
            Err(e) => {
                log::error!("failed to read standard input: {e}");
                std::process::exit(1);
            },
        }

        if !args.repeat {
            break;
        }
    }
}

/// Prints the prompt and reads one line.
///
/// Returns `Ok(None)` at the end of input, and otherwise the line with
/// surrounding whitespace removed.
fn read_expression(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
