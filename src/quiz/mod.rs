// src/quiz/mod.rs

pub mod answer;
pub mod question;
pub mod session;
pub mod timer;

// Re-exports for cleaner imports
pub use question::{Question, QuestionKind, OPTION_COUNT};
pub use session::{
    Progress, QuestionEvent, QuizError, QuizFormat, QuizSession, Resolution, QUESTIONS_PER_QUIZ,
};
pub use timer::{Countdown, Tick, QUESTION_TIME_SECS};
