pub mod catalog;
mod examiner;
pub mod prompts;
mod types;

pub use examiner::{Examiner, parse_grading, parse_question};
pub use types::{GenerateResult, GradeBand, GradeResult};

/// A request that has passed field and allow-list validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamAction {
    Generate {
        subject: String,
        topic: String,
    },
    Grade {
        subject: String,
        topic: String,
        question: String,
        answer: String,
    },
}
