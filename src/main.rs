//! Caesar Solver - CLI
//!
//! Breaks Caesar shift ciphers by exhaustive search with dictionary and
//! letter-frequency scoring.

use anyhow::{Result, bail};
use caesar_solver::{
    commands::{
        SAMPLE_SENTENCES, SolveConfig, analyze_text, random_cases, run_benchmark, run_simple,
        solve_text,
    },
    core::apply_shift,
    lexicon::{DEFAULT_DICTIONARY_PATH, Lexicon, load_or_fallback},
    output::{
        print_analysis_result, print_benchmark_result, print_lexicon_warning, print_solve_report,
    },
    solver::Solver,
};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "caesar_solver",
    about = "Caesar cipher solver using dictionary matching and English letter frequencies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (falls back to a built-in list)
    #[arg(short = 'd', long, global = true, default_value = DEFAULT_DICTIONARY_PATH)]
    dict: PathBuf,

    /// Number of candidates in the shortlist
    #[arg(short = 'n', long, global = true, default_value = "5")]
    top: usize,

    /// Characters of decoded text shown per shortlist line
    #[arg(long, global = true, default_value = "60")]
    width: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default - solve ciphertexts one per line)
    Simple,

    /// Solve a ciphertext (reads a line from stdin if none is given)
    Solve {
        /// The ciphertext to solve
        text: Vec<String>,

        /// Show per-candidate score breakdown
        #[arg(short, long)]
        verbose: bool,
    },

    /// Shift a plaintext to produce ciphertext
    Encrypt {
        /// Signed shift to apply, e.g. 3 or -5
        #[arg(allow_negative_numbers = true)]
        shift: i32,

        /// The text to shift
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Score a text as-is and show its letter distribution
    Analyze {
        /// Text to analyze
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Measure recovery accuracy on built-in sample sentences
    Benchmark {
        /// Number of random (sentence, shift) cases to test
        #[arg(short = 'c', long, default_value = "100")]
        count: usize,
    },
}

/// Load the lexicon from the -d flag, warning if the fallback is used
fn load_lexicon(path: &Path) -> Lexicon {
    let (lexicon, warning) = load_or_fallback(path);
    if let Some(warning) = warning {
        print_lexicon_warning(&warning);
    }
    lexicon
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Encrypt { shift, text } => {
            println!("{}", apply_shift(&text.join(" "), shift));
            Ok(())
        }
        Commands::Simple => {
            let lexicon = load_lexicon(&cli.dict);
            let solver = Solver::new(&lexicon);
            run_simple(&solver, cli.top, cli.width).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { text, verbose } => {
            let lexicon = load_lexicon(&cli.dict);
            run_solve_command(&lexicon, &text, verbose, cli.top, cli.width)
        }
        Commands::Analyze { text } => {
            let lexicon = load_lexicon(&cli.dict);
            let result = analyze_text(&text.join(" "), &lexicon);
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let lexicon = load_lexicon(&cli.dict);
            run_benchmark_command(&lexicon, count);
            Ok(())
        }
    }
}

fn run_solve_command(
    lexicon: &Lexicon,
    text: &[String],
    verbose: bool,
    top: usize,
    width: usize,
) -> Result<()> {
    let ciphertext = if text.is_empty() {
        read_ciphertext()?
    } else {
        text.join(" ")
    };

    let solver = Solver::new(lexicon);
    let mut config = SolveConfig::new(ciphertext);
    config.shortlist = top;
    config.preview_width = width;

    let report = solve_text(config, &solver)?;
    print_solve_report(&report, verbose);
    Ok(())
}

/// Prompt for one line of ciphertext on stdin
fn read_ciphertext() -> Result<String> {
    print!("Enter Caesar-encrypted text: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("No ciphertext given");
    }
    Ok(input.trim().to_string())
}

fn run_benchmark_command(lexicon: &Lexicon, count: usize) {
    println!(
        "Running benchmark on {count} random cases from {} sample sentences...",
        SAMPLE_SENTENCES.len()
    );

    let solver = Solver::new(lexicon);
    let cases = random_cases(SAMPLE_SENTENCES, count);
    let result = run_benchmark(&solver, &cases);
    print_benchmark_result(&result);
}
