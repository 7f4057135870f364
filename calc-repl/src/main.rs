mod assemble;
mod error;
mod repl;

use env_logger::Env;
use log::info;
use repl::Repl;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, BufRead, IsTerminal}, process};

/// Handles one line of input, printing the result or reporting the error.
fn run_line(repl: &mut Repl, line: &str) {
    match repl.handle(line) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => (),
        Err(err) => err.report_to_stderr(),
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    info!("calc-repl v{} starting", env!("CARGO_PKG_VERSION"));

    let mut repl = Repl::new();
    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run every line of the given file
        let input = match fs::read_to_string(&filename) {
            Ok(input) => input,
            Err(err) => {
                eprintln!("error: could not read `{}`: {}", filename, err);
                process::exit(1);
            },
        };
        input.lines().for_each(|line| run_line(&mut repl, line));
    } else if !io::stdin().is_terminal() {
        // read lines from stdin
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => run_line(&mut repl, &line),
                Err(err) => {
                    eprintln!("error: {}", err);
                    process::exit(1);
                },
            }
        }
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("error: {}", err);
                process::exit(1);
            },
        };

        fn process_line(rl: &mut DefaultEditor, repl: &mut Repl) -> Result<(), ReadlineError> {
            let input = rl.readline(&repl.prompt())?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            run_line(repl, &input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut repl) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
