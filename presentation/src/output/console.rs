//! Console output for export results

use colored::Colorize;
use farlex_application::{ExportScope, ExportSummary};

/// Formats run summaries for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the summary printed after a successful run
    pub fn summary(scope: &ExportScope, summary: &ExportSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Exported {scope}")));
        output.push('\n');

        output.push_str(&Self::line("Output:", &summary.output));
        output.push_str(&Self::line(
            "Pages visited:",
            &summary.pages_visited().to_string(),
        ));
        output.push_str(&Self::line(
            "From cache:",
            &summary.pages_cached().to_string(),
        ));
        output.push_str(&Self::line(
            "With quiz:",
            &summary.pages_with_quiz().to_string(),
        ));
        output.push_str(&Self::line(
            "Rows written:",
            &summary.rows_written().to_string(),
        ));
        output.push_str(&Self::line(
            "Time waited:",
            &format!("{}s", summary.total_pause().as_secs()),
        ));

        let unanswered = summary.unanswered();
        if unanswered > 0 {
            output.push_str(&format!(
                "\n{} {} rows have no answer marked\n",
                "Warning:".yellow().bold(),
                unanswered
            ));
        }

        if summary.pages_with_quiz() == 0 && summary.pages_visited() > 0 {
            output.push_str(&format!(
                "\n{} no quiz found on the visited pages\n",
                "Note:".cyan().bold()
            ));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn line(label: &str, value: &str) -> String {
        format!("{} {}\n", format!("{label:<15}").cyan(), value)
    }
}
