//! Grading of captured output
//!
//! Predicates decide pass/fail on stdout alone; the classifier folds runner
//! failures and silent crashes into a verdict before any predicate runs.

pub mod attempt;
pub mod classifier;
pub mod predicate;

pub use attempt::GradeAttempt;
pub use classifier::{GradeVerdict, VerdictClassifier};
pub use predicate::{
    contains_all, contains_all_line_endings, contains_all_lines, AllOf, ContainsAll,
    ContainsAllLineEndings, ContainsAllLines, GradingPredicate,
};
