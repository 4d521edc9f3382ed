use std::io::{self, BufRead, Write};

use smash::executor::{self, RunOutcome};
use smash::parser::parse;
use smash::shell::Shell;
use smash::tokenizer::tokenize;
use smash::{logging, signal};

const PROMPT: &str = "smash > ";

fn main() {
    logging::init();

    if let Err(e) = signal::install_handler() {
        eprintln!("smash error: failed to install signal handler: {}", e);
        std::process::exit(1);
    }

    let mut shell = Shell::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        signal::reap_and_reconcile(&mut shell.jobs);

        print!("{}", PROMPT);
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(_)) | None => {
                // EOF on stdin ends the session cleanly, same as `quit`.
                println!();
                std::process::exit(0);
            }
        };

        let tokens = match tokenize(&line) {
            Ok(tokens) => tokens,
            Err(e) => {
                println!("{}", e.render());
                continue;
            }
        };

        let command_list = match parse(tokens) {
            Ok(Some(list)) => list,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e.render());
                continue;
            }
        };

        match executor::run(&mut shell, &line, command_list) {
            RunOutcome::Continue => continue,
            RunOutcome::Exit(code) => std::process::exit(code),
        }
    }
}
