//! Interactive attendance session over stdin.
//!
//! # Responsibility
//! - Own one in-memory session for the lifetime of the process.
//! - Parse untrusted line input into core operations.

mod commands;

use chrono::Local;
use commands::{execute, Outcome};
use rollcall_core::{init_logging_with, AttendanceStore, LogConfig};
use std::io::{self, BufRead, Write};

fn main() {
    match LogConfig::from_env() {
        Ok(Some(config)) => {
            if let Err(err) = init_logging_with(config) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
        Ok(None) => {}
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }

    let today = Local::now().date_naive();
    let empty = std::env::args().skip(1).any(|arg| arg == "--empty");
    let mut store = if empty {
        AttendanceStore::in_memory()
    } else {
        AttendanceStore::seeded(today)
    };

    println!(
        "rollcall {} ({} students); type `help`",
        rollcall_core::core_version(),
        store.list_students().len()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: failed to read input: {err}");
                break;
            }
        };
        match execute(&mut store, &line, today) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Print(text)) if text.is_empty() => {}
            Ok(Outcome::Print(text)) => println!("{text}"),
            Err(err) => {
                log::debug!("event=command_rejected module=cli status=error");
                println!("error: {err}");
            }
        }
        let _ = stdout.flush();
    }
}
