//! Console output for pipeline results

use clarifier_application::PipelineOutcome;
use clarifier_domain::{ConfigIssue, Severity};
use colored::Colorize;
use std::path::Path;

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner printed before the pipeline starts
    pub fn banner(input: &Path, max_iterations: usize) -> String {
        let mut output = Self::header("Requirements Clarifier");
        output.push_str(&format!(
            "\n{} {}\n{} {}\n",
            "Input:".cyan().bold(),
            input.display(),
            "Rounds:".cyan().bold(),
            max_iterations
        ));
        output
    }

    /// Summary of a finished run
    pub fn format_summary(outcome: &PipelineOutcome, artifacts_dir: &Path) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Summary"));

        let stages: Vec<&str> = outcome
            .stages_completed
            .iter()
            .map(|s| s.display_name())
            .collect();
        output.push_str(&format!(
            "{} {}\n",
            "Stages completed:".bold(),
            if stages.is_empty() {
                "none".to_string()
            } else {
                stages.join(" -> ")
            }
        ));

        if let Some(clarification) = &outcome.clarification {
            output.push_str(&format!(
                "{} {} round(s), {} answer(s), {}\n",
                "Clarification:".bold(),
                clarification.rounds,
                clarification.records.len(),
                clarification.reason
            ));
        }

        output.push_str(&format!(
            "{} {}\n",
            "Artifacts:".bold(),
            artifacts_dir.display()
        ));
        for path in &outcome.release_paths {
            output.push_str(&format!("{} {}\n", "Released:".green().bold(), path.display()));
        }

        if let Some(halt) = &outcome.halted_on {
            output.push_str(&format!("{} {}\n", "Halted:".red().bold(), halt));
        }

        output.push_str(&Self::footer());
        output
    }

    /// One line per configuration issue
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
