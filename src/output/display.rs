//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles};
use crate::commands::{CheckResult, WordListSummary};
use crate::game::{MAX_TRIES, Statistics};
use colored::Colorize;

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} vs {}",
        result.guess.to_string().to_uppercase().bright_white().bold(),
        result.target.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("\n  {}", feedback_tiles(&result.guess, &result.feedback));
    println!("  {}\n", result.feedback.to_emoji());

    if result.feedback.is_exact() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print a word list summary
pub fn print_word_list_summary(summary: &WordListSummary) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Word list: {}",
        summary.source.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("   Words:        {}", summary.total);
    println!("   Unique:       {}", summary.unique);
    println!("   Blank lines:  {}", summary.blank_lines);

    if summary.rejected.is_empty() {
        println!("   Rejected:     {}", "0".green());
        return;
    }

    println!(
        "   Rejected:     {}",
        summary.rejected.len().to_string().red().bold()
    );
    for rejected in &summary.rejected {
        println!(
            "     line {:>5}: {:?} ({})",
            rejected.line, rejected.content, rejected.reason
        );
    }
}

/// Print the statistics of a finished session
pub fn print_session_stats(stats: &Statistics) {
    if stats.games_played == 0 {
        return;
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SESSION STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Played:       {}", stats.games_played);
    println!(
        "   Win rate:     {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Best streak:  {}", stats.max_streak);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (tries, &count) in (1..=MAX_TRIES).zip(&stats.guess_distribution) {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {tries}: {} {count:4}", bar.green());
    }
}
