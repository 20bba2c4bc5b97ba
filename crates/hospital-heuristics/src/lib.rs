//! Heuristic estimators guiding state-space search in the hospital domain.
//!
//! A heuristic estimates, for any search state, how far the state is from
//! satisfying the level's goals. The search driver orders its frontier by
//! these estimates and so reaches solutions faster than uninformed search.
//!
//! # The Contract
//!
//! Every estimator implements [`heuristic::Heuristic`]:
//!
//! 1. **Preprocess** - [`Heuristic::preprocess()`](heuristic::Heuristic::preprocess)
//!    is called once per level, before search starts, and may build lookup
//!    structures owned by the estimator.
//! 2. **Evaluate** - [`Heuristic::evaluate()`](heuristic::Heuristic::evaluate)
//!    is called once per generated state. It is a pure function of the state,
//!    the goal description and whatever was built in step 1.
//!
//! [`estimator::Estimator`] wraps both steps so that preprocessing always
//! happens exactly once before the first evaluation.
//!
//! # Available Heuristics
//!
//! The set is closed; [`heuristic::HeuristicKind`] selects one by name.
//!
//! | kind | estimate | preprocessing |
//! |---|---|---|
//! | [`zero::ZeroHeuristic`] | Σ nearest same-letter goal distance + unsatisfied sub-goals | [`goal_index::GoalIndex`] from the level |
//! | [`goal_count::GoalCountHeuristic`] | sub-goals minus satisfied agent sub-goals | none |
//! | [`advanced::AdvancedHeuristic`] | Σ nearest same-letter goal distance | none (scans the goal description) |
//!
//! Distances are Manhattan distances; walls are ignored.
//!
//! # Admissibility
//!
//! None of the estimators is guaranteed admissible. The distance sums let
//! several boxes of one letter measure against the same goal cell, and the
//! zero heuristic counts a misplaced box both in its distance and in the
//! unsatisfied sub-goals.
//!
//! # Thread Safety
//!
//! `evaluate` takes `&self` and the trait requires `Send + Sync`, so one
//! preprocessed estimator can score distinct states from several threads.
//!
//! # Example
//!
//! ```
//! use hospital_engine::{BoxLetter, GoalDescription, GoalTarget, Level, Position, State};
//! use hospital_heuristics::{estimator::Estimator, heuristic::HeuristicKind};
//!
//! let a = BoxLetter::from_char('A').unwrap();
//! let b = BoxLetter::from_char('B').unwrap();
//! let level = Level::new("example", 6, 6)
//!     .with_goal(Position::new(0, 0), GoalTarget::Box(a))
//!     .with_goal(Position::new(5, 5), GoalTarget::Box(b));
//! let goals = GoalDescription::from_level(&level);
//!
//! let estimator = Estimator::new(HeuristicKind::Advanced.build(), &level, &goals);
//! let state = State::new([], [(Position::new(1, 0), a), (Position::new(5, 4), b)]);
//! assert_eq!(estimator.estimate(&state), 2);
//! ```

pub mod advanced;
pub mod estimator;
pub mod goal_count;
pub mod goal_index;
pub mod heuristic;
pub mod zero;
