//! Display functions for command results

use super::formatters::{best_shift_label, frequency_bar, shortlist_line, signed_shift};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveReport};
use crate::lexicon::LexiconUnavailable;
use colored::Colorize;

/// Warn that the dictionary could not be read and the fallback is in use
pub fn print_lexicon_warning(warning: &LexiconUnavailable) {
    eprintln!("{}", format!("⚠️  {warning}").yellow());
}

/// Print the result of solving a ciphertext
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    let best = &report.best;

    println!(
        "\n🔍 {} ({}):",
        "Best candidate".bright_cyan().bold(),
        best_shift_label(best.shift).bright_yellow()
    );
    println!("{}", best.decoded_text.bright_white().bold());
    println!(
        "Word Matches: {} | Freq Score: {:.1} | Total Score: {:.1}",
        best.word_match_count, best.frequency_score, best.total_score
    );

    println!("\n📋 {}", "Best Candidates".bright_cyan().bold());
    for entry in &report.shortlist {
        println!("{}", shortlist_line(entry));
        if verbose {
            println!(
                "           Freq: {:6.1} | Words: {:5.1}",
                entry.frequency_score,
                entry.total_score - entry.frequency_score
            );
        }
    }

    if verbose {
        println!(
            "\n{} candidates ranked for {:?}",
            report.total_candidates, report.ciphertext
        );
    }
}

/// Print the result of text analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ENGLISH-LIKENESS ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} letters, {} words", result.letters, result.words);
    println!(
        "   Word matches:  {}",
        result.word_matches.to_string().bright_yellow()
    );
    if !result.matched_words.is_empty() {
        println!("   Matched:       {}", result.matched_words.join(", "));
    }
    println!("   Freq score:    {:.1}", result.frequency_score);
    println!(
        "   Total score:   {}",
        format!("{:.1}", result.total_score).bright_yellow().bold()
    );

    println!("\n📈 {}", "Letter distribution:".bright_cyan().bold());
    for deviation in &result.deviations {
        println!(
            "   {}: {} {:5.2}% (expected {:5.2}%)",
            deviation.letter,
            frequency_bar(deviation.observed, 30).green(),
            deviation.observed,
            deviation.expected
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Cases tested:     {}", result.total_cases);
    println!(
        "   Recovered:        {}",
        format!(
            "{} ({:.1}%)",
            result.recovered,
            result.accuracy * 100.0
        )
        .bright_yellow()
        .bold()
    );
    println!("   Average rank:     {:.2}", result.average_rank);
    println!(
        "   Worst rank:       {}",
        format!("{}", result.worst_rank).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Solves/second:    {:.1}", result.solves_per_second);

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Not recovered:".red().bold());
        for case in &result.failures {
            println!("   [Shift {:>3}] {}", signed_shift(case.shift), case.plaintext);
        }
    }
}
