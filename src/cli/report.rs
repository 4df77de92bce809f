//! Report formatting and printing utilities.
//!
//! Separate from the commands so locsheet can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, PatchSummary, RestoreSummary,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Maximum number of ignored keys listed in verbose mode.
const MAX_IGNORED_DISPLAY: usize = 20;

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
    if let CommandSummary::Patch(summary) = &result.summary {
        print_ignored_warning_to(summary, verbose, &mut io::stderr().lock());
    }
}

/// Print the command summary to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    if verbose && let Some(path) = &result.config_path {
        let _ = writeln!(writer, "{} {}", "config:".dimmed(), path.display());
    }

    match &result.summary {
        CommandSummary::Init(summary) => print_init(summary, writer),
        CommandSummary::Patch(summary) => print_patch(summary, verbose, writer),
        CommandSummary::Restore(summary) => print_restore(summary, writer),
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let action = if summary.sheet_created {
        "Created"
    } else {
        "Rewrote"
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} sheet {} in {} with {}",
            action,
            summary.lang,
            summary.output.display(),
            plural(summary.record_count, "record")
        )
        .green()
    );
    if summary.rows_cleared > 0 {
        let _ = writeln!(
            writer,
            "  - cleared {} left over from the previous sheet",
            plural(summary.rows_cleared, "row")
        );
    }
}

fn print_patch<W: Write>(summary: &PatchSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Patched sheet {} in {}: {}/{} matched, {} changed",
            summary.lang,
            summary.translate.display(),
            summary.matched_count,
            plural(summary.key_count, "key"),
            summary.changed_count
        )
        .green()
    );

    if verbose {
        let _ = writeln!(
            writer,
            "  - wrote {}",
            plural(summary.cells_written, "value cell")
        );
    }

    if verbose && !summary.ignored_keys.is_empty() {
        let total = summary.ignored_keys.len();
        for key in summary.ignored_keys.iter().take(MAX_IGNORED_DISPLAY) {
            let _ = writeln!(writer, "  {} {}", "ignored:".dimmed(), key);
        }
        if total > MAX_IGNORED_DISPLAY {
            let _ = writeln!(writer, "  (and {} more)", total - MAX_IGNORED_DISPLAY);
        }
    }
}

fn print_restore<W: Write>(summary: &RestoreSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Restored {} from sheet {} to {}",
            plural(summary.key_count, "key"),
            summary.lang,
            summary.output_file.display()
        )
        .green()
    );
}

/// Warn about patch keys that were not applied because the target lacks them.
pub fn print_ignored_warning_to<W: Write>(summary: &PatchSummary, verbose: bool, writer: &mut W) {
    let count = summary.ignored_keys.len();
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} not present in {} and not added (use {} for details)",
            "warning:".bold().yellow(),
            plural(count, "patch key"),
            summary.translate.display(),
            "-v".cyan()
        );
    }
}
