use std::path::Path;

use owo_colors::OwoColorize;
use pagetext_core::{PagetextError, RunObserver, RunReport, Stage};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "pagetext".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Scrape document pages into plain text\n".dimmed());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print the closing summary line to stdout
pub fn print_summary(report: &RunReport) {
    println!(
        "\n{} {}/{} pages saved. Individual pages in {}/, full text in {}",
        "All done!".bold().green(),
        report.succeeded(),
        report.total(),
        report.output_dir.display(),
        report.combined_path.display()
    );
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Prints per-page progress to stdout.
///
/// Markers are colored; the text after them is left plain so the lines stay
/// greppable.
#[derive(Debug, Default)]
pub struct ConsoleObserver {
    verbose: bool,
}

impl ConsoleObserver {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl RunObserver for ConsoleObserver {
    fn started(&mut self, index: usize, total: usize, url: &str) {
        println!("{} Scraping {}", format!("[{}/{}]", index, total).dimmed(), url);
    }

    fn saved(&mut self, path: &Path) {
        if self.verbose {
            let size = std::fs::metadata(path).map(|m| m.len() as usize).unwrap_or(0);
            println!("  {} {} {}", "Saved:".green(), path.display(), format!("({})", format_size(size)).dimmed());
        } else {
            println!("  {} {}", "Saved:".green(), path.display());
        }
    }

    fn failed(&mut self, _url: &str, stage: Stage, error: &PagetextError) {
        if self.verbose {
            println!("  {} {} {}", "ERROR:".red(), error, format!("(while {})", stage).dimmed());
        } else {
            println!("  {} {}", "ERROR:".red(), error);
        }
    }
}
