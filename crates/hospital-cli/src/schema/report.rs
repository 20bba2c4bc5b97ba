use chrono::{DateTime, Utc};
use hospital_engine::{GoalDescription, SubGoal};
use hospital_heuristics::{goal_index::GoalIndex, heuristic::HeuristicKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluationReport {
    pub level: String,
    pub evaluated_at: DateTime<Utc>,
    pub num_sub_goals: usize,
    pub num_unsatisfied: usize,
    pub is_goal_state: bool,
    pub estimates: Vec<Estimate>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Estimate {
    pub heuristic: HeuristicKind,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalsReport<'a> {
    pub level: &'a str,
    pub sub_goals: &'a [SubGoal],
    pub goal_index: &'a GoalIndex,
}

impl<'a> GoalsReport<'a> {
    pub fn new(
        level: &'a str,
        goal_description: &'a GoalDescription,
        goal_index: &'a GoalIndex,
    ) -> Self {
        Self {
            level,
            sub_goals: goal_description.sub_goals(),
            goal_index,
        }
    }
}
