// src/ui/quiz.rs
//
// Terminal front-end for the quiz session: a cooked-mode format
// prompt, then one raw-mode input line per question with a 1 Hz
// countdown driven by the event-poll timeout.

use crate::config::Config;
use crate::model::dataset::ElementSet;
use crate::quiz::{
    Progress, QuestionEvent, QuizFormat, QuizSession, Resolution, Tick, QUESTIONS_PER_QUIZ,
    QUESTION_TIME_SECS,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Write};
use std::time::Duration;

// --- 1. RAW MODE GUARD ---

/// Re-enables cooked mode when dropped, even on early returns.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

// --- 2. ENTRY POINT ---

/// Asks for a format, runs a ten-question session and prints the score.
pub fn run_quiz(set: &ElementSet, config: &Config) -> io::Result<()> {
    let Some(format) = prompt_format()? else {
        println!("Quiz cancelled.");
        return Ok(());
    };

    let rng = StdRng::from_entropy();
    let mut session = match QuizSession::start(set, format, &config.excluded_families, rng) {
        Ok(s) => s,
        Err(e) => {
            log::error!("could not start the quiz: {}", e);
            return Ok(());
        }
    };

    println!(
        "\nStarting a {} quiz: {} questions, {} seconds each.",
        format.label(),
        QUESTIONS_PER_QUIZ,
        QUESTION_TIME_SECS
    );
    println!("Enter submits, Esc leaves the quiz, Ctrl+N skips a question.");
    println!("Drawing from {} elements.\n", session.pool_len());

    while session.is_active() {
        let Some(question) = session.current() else {
            break;
        };
        println!(
            "{} (score {})",
            format!("Question {}/{}", session.question_number(), QUESTIONS_PER_QUIZ).bold(),
            session.score()
        );
        println!("{}", question.prompt);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let outcome = run_question(&mut session)?;
        println!();
        report_outcome(&outcome);
        if let Some(Progress::Finished { score }) = progress_of(&outcome) {
            println!("\nFinal Score: {}/{}", score, QUESTIONS_PER_QUIZ);
        }
        println!();
    }
    Ok(())
}

// --- 3. PER-QUESTION EVENT LOOP ---

/// Runs the raw-mode input loop until the question resolves. Poll
/// timeouts supply the countdown ticks; blank submissions leave the
/// question (and its clock) in place.
fn run_question(session: &mut QuizSession<'_, StdRng>) -> io::Result<Resolution> {
    let _guard = RawModeGuard::enable()?;
    let mut input = String::new();
    draw_status(session.remaining_secs(), &input)?;

    loop {
        if event::poll(Duration::from_secs(1))? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(session.resolve(QuestionEvent::Exit)),
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(session.resolve(QuestionEvent::Pass));
                }
                KeyCode::Enter => {
                    let submitted = std::mem::take(&mut input);
                    let resolution = session.resolve(submit_event(session, submitted));
                    if resolution != Resolution::NoAnswer {
                        return Ok(resolution);
                    }
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.push(c);
                }
                _ => {}
            }
            draw_status(session.remaining_secs(), &input)?;
        } else {
            match session.tick() {
                Tick::Expired => return Ok(session.resolve(QuestionEvent::Timeout)),
                Tick::Running(_) => draw_status(session.remaining_secs(), &input)?,
                Tick::Halted => {}
            }
        }
    }
}

/// Digits pick options in multiple choice; everything else is passed
/// through as typed.
fn submit_event<R: Rng>(session: &QuizSession<'_, R>, raw: String) -> QuestionEvent {
    if session.format() == QuizFormat::MultipleChoice {
        if let Some(q) = session.current() {
            if let Ok(idx) = raw.trim().parse::<usize>() {
                if (1..=q.options.len()).contains(&idx) {
                    return QuestionEvent::Submit(q.options[idx - 1].clone());
                }
            }
        }
    }
    QuestionEvent::Submit(raw)
}

fn draw_status(remaining: u32, input: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(terminal::ClearType::CurrentLine)
    )?;
    write!(stdout, "{} > {}", format!("[{:>2}s]", remaining).bold(), input)?;
    stdout.flush()
}

fn report_outcome(outcome: &Resolution) {
    match outcome {
        Resolution::Answered { correct: true, .. } => {
            println!("{}", "Correct!".green());
        }
        Resolution::Answered {
            correct: false,
            answer,
            ..
        } => {
            println!("{} The answer was {}.", "Wrong.".red(), answer);
        }
        Resolution::Passed { answer, .. } => {
            println!("Skipped. The answer was {}.", answer);
        }
        Resolution::TimedOut { answer, .. } => {
            println!("{} The answer was {}.", "Time is up.".yellow(), answer);
        }
        Resolution::Abandoned { score, answered } => {
            println!("Quiz left early with {} correct out of {} answered.", score, answered);
        }
        // run_question never returns NoAnswer
        Resolution::NoAnswer => {}
    }
}

fn progress_of(outcome: &Resolution) -> Option<Progress> {
    match outcome {
        Resolution::Answered { progress, .. }
        | Resolution::Passed { progress, .. }
        | Resolution::TimedOut { progress, .. } => Some(*progress),
        _ => None,
    }
}

// --- 4. FORMAT PROMPT ---

fn prompt_format() -> io::Result<Option<QuizFormat>> {
    println!("Choose the quiz format:");
    println!("  1) multiple choice");
    println!("  2) free response");
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(parse_format(&line))
}

fn parse_format(input: &str) -> Option<QuizFormat> {
    match input.trim() {
        "1" => Some(QuizFormat::MultipleChoice),
        "2" => Some(QuizFormat::FreeResponse),
        _ => None,
    }
}
