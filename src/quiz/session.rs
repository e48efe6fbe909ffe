// src/quiz/session.rs

use crate::model::dataset::ElementSet;
use crate::model::element::{Element, Family};
use crate::quiz::answer;
use crate::quiz::question::{self, Question};
use crate::quiz::timer::{Countdown, Tick, QUESTION_TIME_SECS};
use rand::Rng;
use std::fmt;

// --- 1. SESSION PARAMETERS ---

/// Questions per quiz run.
pub const QUESTIONS_PER_QUIZ: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFormat {
    MultipleChoice,
    FreeResponse,
}

impl QuizFormat {
    pub fn label(&self) -> &'static str {
        match self {
            QuizFormat::MultipleChoice => "multiple choice",
            QuizFormat::FreeResponse => "free response",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Every element was excluded, leaving nothing to ask about.
    EmptyPool,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::EmptyPool => {
                write!(f, "no elements remain in the pool after family exclusions")
            }
        }
    }
}

impl std::error::Error for QuizError {}

// --- 2. EVENTS AND RESOLUTIONS ---

/// Player input for the current question.
#[derive(Debug, Clone)]
pub enum QuestionEvent {
    /// An answer as typed (or the text of a chosen option).
    Submit(String),
    /// Give up on this question and move on.
    Pass,
    /// The countdown ran out before an answer arrived.
    Timeout,
    /// Leave the quiz entirely.
    Exit,
}

/// What the session did with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The submission normalized to nothing; the question stands and
    /// the clock keeps running.
    NoAnswer,
    Answered {
        correct: bool,
        answer: String,
        progress: Progress,
    },
    Passed {
        answer: String,
        progress: Progress,
    },
    TimedOut {
        answer: String,
        progress: Progress,
    },
    /// The quiz ended early; `answered` counts fully resolved questions.
    Abandoned {
        score: u32,
        answered: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Next,
    Finished { score: u32 },
}

// --- 3. SESSION ---

/// A running quiz: a fixed question pool, a score, and one live
/// question with its countdown. Constructing a session starts the quiz;
/// it deactivates after the last question resolves or on exit.
#[derive(Debug)]
pub struct QuizSession<'a, R: Rng> {
    set: &'a ElementSet,
    pool: Vec<&'a Element>,
    format: QuizFormat,
    rng: R,
    score: u32,
    question_index: usize,
    active: bool,
    current: Option<Question>,
    countdown: Countdown,
}

impl<'a, R: Rng> QuizSession<'a, R> {
    /// Starts a quiz over every element whose family is not excluded.
    pub fn start(
        set: &'a ElementSet,
        format: QuizFormat,
        excluded_families: &[Family],
        mut rng: R,
    ) -> Result<Self, QuizError> {
        let pool: Vec<&Element> = set
            .all()
            .iter()
            .filter(|e| !excluded_families.contains(&e.family))
            .collect();
        let current =
            question::generate(set, &pool, format, &mut rng).ok_or(QuizError::EmptyPool)?;
        Ok(Self {
            set,
            pool,
            format,
            rng,
            score: 0,
            question_index: 0,
            active: true,
            current: Some(current),
            countdown: Countdown::new(QUESTION_TIME_SECS),
        })
    }

    pub fn format(&self) -> QuizFormat {
        self.format
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based number of the question on screen.
    pub fn question_number(&self) -> usize {
        self.question_index + 1
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Advances the countdown by one second. `Expired` is reported for
    /// exactly one tick per question; the caller resolves it with
    /// [`QuestionEvent::Timeout`].
    pub fn tick(&mut self) -> Tick {
        if !self.active {
            return Tick::Halted;
        }
        self.countdown.tick()
    }

    /// Feeds one event into the state machine and reports the outcome.
    pub fn resolve(&mut self, event: QuestionEvent) -> Resolution {
        let expected = match (&self.current, self.active) {
            (Some(q), true) => q.answer.clone(),
            _ => {
                return Resolution::Abandoned {
                    score: self.score,
                    answered: self.question_index,
                }
            }
        };
        match event {
            QuestionEvent::Exit => {
                self.active = false;
                self.current = None;
                Resolution::Abandoned {
                    score: self.score,
                    answered: self.question_index,
                }
            }
            QuestionEvent::Pass => {
                let progress = self.advance();
                Resolution::Passed {
                    answer: expected,
                    progress,
                }
            }
            QuestionEvent::Timeout => {
                let progress = self.advance();
                Resolution::TimedOut {
                    answer: expected,
                    progress,
                }
            }
            QuestionEvent::Submit(text) => {
                if answer::normalize(&text).is_empty() {
                    return Resolution::NoAnswer;
                }
                let correct = answer::answers_match(&expected, &text);
                if correct {
                    self.score += 1;
                }
                let progress = self.advance();
                Resolution::Answered {
                    correct,
                    answer: expected,
                    progress,
                }
            }
        }
    }

    /// Moves to the next question, or finishes after the last one.
    fn advance(&mut self) -> Progress {
        self.question_index += 1;
        if self.question_index >= QUESTIONS_PER_QUIZ {
            self.active = false;
            self.current = None;
            return Progress::Finished { score: self.score };
        }
        self.current = question::generate(self.set, &self.pool, self.format, &mut self.rng);
        self.countdown.reset(QUESTION_TIME_SECS);
        Progress::Next
    }
}
