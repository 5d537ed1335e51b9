//! Progress reporting for pipeline runs

use clarifier_application::PipelineProgress;
use clarifier_domain::{AgentRole, Stage, TerminationReason};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while an agent is working and a line per stage
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_label(stage: Stage) -> String {
        let position = Stage::default_sequence()
            .iter()
            .position(|s| *s == stage)
            .map(|i| i + 1)
            .unwrap_or(0);
        format!("Stage {}: {}", position, stage.display_name())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineProgress for ProgressReporter {
    fn on_stage_start(&self, stage: Stage) {
        println!();
        println!("{} {}", "->".cyan(), Self::stage_label(stage).bold());
    }

    fn on_stage_complete(&self, stage: Stage) {
        println!("{} {} complete", "v".green(), stage.display_name());
    }

    fn on_agent_start(&self, role: AgentRole) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(role.display_name().to_string());
        pb.set_message("working...");
        pb.enable_steady_tick(Duration::from_millis(120));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_agent_complete(&self, role: AgentRole, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        // Cleared so prompts that follow start on a clean line
        pb.finish_and_clear();
        if success {
            println!("  {} {}", "v".green(), role.display_name());
        } else {
            println!("  {} {} (failed)", "x".red(), role.display_name());
        }
    }

    fn on_round_start(&self, round: usize, max_rounds: usize, questions: usize) {
        println!();
        println!(
            "{} {}",
            format!("Clarification round {}/{}", round, max_rounds)
                .yellow()
                .bold(),
            format!("({} question(s))", questions).dimmed()
        );
    }

    fn on_clarification_end(&self, rounds: usize, reason: TerminationReason) {
        println!(
            "  {} Clarification ended after {} round(s): {}",
            "*".cyan(),
            rounds,
            reason
        );
    }
}
