//! Progress reporting for export runs

use colored::Colorize;
use farlex_application::{PageOutcome, ProgressNotifier};
use farlex_domain::{PageId, Section};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one bar per section
pub struct ProgressReporter {
    multi: MultiProgress,
    section_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            section_bar: Mutex::new(None),
        }
    }

    fn section_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) -> bool {
        match self.section_bar.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(bar) => {
                    f(bar);
                    true
                }
                None => false,
            },
            Err(_) => false,
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_section_start(&self, section: Section, total_pages: usize) {
        let bar = self.multi.add(ProgressBar::new(total_pages as u64));
        bar.set_style(Self::section_style());
        bar.set_prefix(section.default_title());
        bar.set_message("Starting...");
        bar.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut guard) = self.section_bar.lock() {
            *guard = Some(bar);
        }
    }

    fn on_page_start(&self, page: &PageId) {
        let shown = self.with_bar(|bar| bar.set_message(page.to_string()));
        if !shown {
            let _ = self
                .multi
                .println(format!("{} {}", "->".cyan(), page.as_str().bold()));
        }
    }

    fn on_page_complete(&self, outcome: &PageOutcome) {
        let status = outcome_line(outcome);
        let shown = self.with_bar(|bar| {
            bar.set_message(status.clone());
            bar.inc(1);
        });
        if !shown {
            let _ = self.multi.println(format!("  {status}"));
        }
    }

    fn on_pause(&self, duration: Duration) {
        self.with_bar(|bar| bar.set_message(format!("waited {}s", duration.as_secs())));
    }

    fn on_section_complete(&self, section: Section) {
        if let Ok(mut guard) = self.section_bar.lock()
            && let Some(bar) = guard.take()
        {
            bar.finish_with_message(format!("{} complete!", section.default_title().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_section_start(&self, section: Section, total_pages: usize) {
        eprintln!(
            "{} {} ({} pages)",
            "->".cyan(),
            section.default_title().bold(),
            total_pages
        );
    }

    fn on_page_start(&self, _page: &PageId) {}

    fn on_page_complete(&self, outcome: &PageOutcome) {
        eprintln!("  {}", outcome_line(outcome));
    }

    fn on_pause(&self, duration: Duration) {
        eprintln!("  {}", format!("waited {}s", duration.as_secs()).dimmed());
    }

    fn on_section_complete(&self, _section: Section) {
        eprintln!();
    }
}

/// One-line status of a finished page
fn outcome_line(outcome: &PageOutcome) -> String {
    let origin = if outcome.was_cached {
        "cached".dimmed()
    } else {
        "fetched".normal()
    };
    match outcome.questions {
        Some(questions) => {
            let mut line = format!(
                "{} {} ({}, {} questions)",
                "v".green(),
                outcome.page,
                origin,
                questions
            );
            if outcome.unanswered > 0 {
                line.push_str(&format!(" {}", format!("{} unanswered", outcome.unanswered).yellow()));
            }
            line
        }
        None => format!("{} {} ({}, no quiz)", "-".dimmed(), outcome.page, origin),
    }
}
