use std::path::PathBuf;

use chrono::Utc;
use hospital_heuristics::{estimator::Estimator, heuristic::HeuristicKind};

use crate::{
    schema::report::{Estimate, EvaluationReport},
    util::{self, Output},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Path to the level file
    level_path: PathBuf,
    /// Heuristic to evaluate with (zero, goalcount, advanced); repeat for several, defaults to all
    #[arg(long = "heuristic", short = 'H')]
    heuristics: Vec<HeuristicKind>,
    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let EvaluateArg {
        level_path,
        heuristics,
        format,
        output,
    } = arg;

    let parsed = util::read_level_file(level_path)?;
    let kinds = if heuristics.is_empty() {
        HeuristicKind::ALL.to_vec()
    } else {
        heuristics.clone()
    };

    let estimates = kinds
        .iter()
        .map(|&kind| {
            let estimator = Estimator::new(kind.build(), &parsed.level, &parsed.goal_description);
            let value = estimator.estimate(&parsed.initial_state);
            tracing::debug!(%kind, value, "estimated initial state");
            Estimate {
                heuristic: kind,
                value,
            }
        })
        .collect::<Vec<_>>();

    let report = EvaluationReport {
        level: parsed.level.name().to_owned(),
        evaluated_at: Utc::now(),
        num_sub_goals: parsed.goal_description.num_sub_goals(),
        num_unsatisfied: parsed
            .goal_description
            .num_unsatisfied(&parsed.initial_state),
        is_goal_state: parsed
            .goal_description
            .is_goal_state(&parsed.initial_state),
        estimates,
    };

    let mut output = Output::from_output_path(output.clone())?;
    match format {
        OutputFormat::Json => output.write_json(&report),
        OutputFormat::Text => output.write_lines(render_text(&report)),
    }
}

fn render_text(report: &EvaluationReport) -> Vec<String> {
    let mut lines = vec![format!(
        "{}: {} sub-goals, {} unsatisfied{}",
        report.level,
        report.num_sub_goals,
        report.num_unsatisfied,
        if report.is_goal_state { " (solved)" } else { "" },
    )];
    lines.extend(
        report
            .estimates
            .iter()
            .map(|e| format!("{:>10} | {}", e.heuristic.to_string(), e.value)),
    );
    lines
}
