use std::path::PathBuf;

use hospital_heuristics::goal_index::GoalIndex;

use crate::{
    schema::report::GoalsReport,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GoalsArg {
    /// Path to the level file
    level_path: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GoalsArg) -> anyhow::Result<()> {
    let GoalsArg { level_path, output } = arg;

    let parsed = util::read_level_file(level_path)?;
    let goal_index = GoalIndex::from_level(&parsed.level);
    let report = GoalsReport::new(parsed.level.name(), &parsed.goal_description, &goal_index);

    Output::from_output_path(output.clone())?.write_json(&report)
}
