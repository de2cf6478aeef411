//! Simple interactive CLI mode
//!
//! Prompts for ciphertext line by line and prints the ranked decodings.

use super::solve::{SolveConfig, solve_text};
use crate::output::print_solve_report;
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// `shortlist` and `preview_width` carry the CLI's display settings into
/// every solve.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(solver: &Solver, shortlist: usize, preview_width: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Caesar Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Paste Caesar-encrypted text and I'll rank every shift by how");
    if solver.lexicon().is_fallback() {
        println!(
            "English it looks ({}).",
            "built-in mini word list, scores lean on letter frequency".yellow()
        );
    } else {
        println!("English it looks ({} dictionary words loaded).", solver.lexicon().len());
    }
    println!("Commands: 'quit' to exit\n");

    loop {
        let Some(input) = get_user_input("Enter Caesar-encrypted text")? else {
            println!("\n👋 Goodbye!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Goodbye!\n");
                return Ok(());
            }
            "" => continue,
            _ => {}
        }

        let mut config = SolveConfig::new(input);
        config.shortlist = shortlist;
        config.preview_width = preview_width;

        match solve_text(config, solver) {
            Ok(report) => print_solve_report(&report, false),
            Err(e) => println!("{}", format!("❌ {e}").red()),
        }
        println!();
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
