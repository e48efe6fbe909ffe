// src/quiz/question.rs

use crate::model::dataset::ElementSet;
use crate::model::element::Element;
use crate::quiz::session::QuizFormat;
use rand::seq::SliceRandom;
use rand::Rng;

// --- 1. TUNING CONSTANTS ---

/// Options presented per multiple-choice question.
pub const OPTION_COUNT: usize = 4;

/// Random draws allowed while collecting distractors.
pub const DISTRACTOR_BUDGET: usize = 100;

/// Independent (kind, element) draws before generation falls back to a
/// kind that is always answerable.
pub const GENERATION_RETRY_CAP: usize = 40;

/// Sentinel used to pad option sets when distractors run out.
pub const FILL_OPTION: &str = "N/A";

// --- 2. QUESTION KINDS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    SymbolToName,
    AtomicNumberToName,
    ElectronConfigToName,
    NameToElectronConfig,
    ProductionToName,
    NameToProduction,
}

pub const ALL_KINDS: &[QuestionKind] = &[
    QuestionKind::SymbolToName,
    QuestionKind::AtomicNumberToName,
    QuestionKind::ElectronConfigToName,
    QuestionKind::NameToElectronConfig,
    QuestionKind::ProductionToName,
    QuestionKind::NameToProduction,
];

impl QuestionKind {
    /// Prompt and expected answer for an element, or None when the
    /// element lacks the data this kind asks about.
    fn build(&self, set: &ElementSet, e: &Element) -> Option<(String, String)> {
        match self {
            QuestionKind::SymbolToName => Some((
                format!("Which element has the symbol {}?", e.symbol),
                e.name.clone(),
            )),
            QuestionKind::AtomicNumberToName => Some((
                format!("Which element has atomic number {}?", e.atomic_number),
                e.name.clone(),
            )),
            QuestionKind::ElectronConfigToName => {
                if e.electron_config.is_empty() {
                    return None;
                }
                Some((
                    format!(
                        "Which element has the electron configuration {}?",
                        e.electron_config
                    ),
                    e.name.clone(),
                ))
            }
            QuestionKind::NameToElectronConfig => {
                if e.electron_config.is_empty() {
                    return None;
                }
                Some((
                    format!("What is the electron configuration of {}?", e.name),
                    e.electron_config.clone(),
                ))
            }
            QuestionKind::ProductionToName => {
                let summary = set.production(&e.symbol)?.summary()?;
                Some((
                    format!("Which element is produced by: {}?", summary),
                    e.name.clone(),
                ))
            }
            QuestionKind::NameToProduction => {
                let summary = set.production(&e.symbol)?.summary()?;
                Some((
                    format!("How is {} chiefly produced?", e.name),
                    summary.to_string(),
                ))
            }
        }
    }

    /// Another element's value of the answered field, drawn as a
    /// distractor candidate.
    fn option_for(&self, set: &ElementSet, other: &Element) -> Option<String> {
        match self {
            QuestionKind::SymbolToName
            | QuestionKind::AtomicNumberToName
            | QuestionKind::ElectronConfigToName
            | QuestionKind::ProductionToName => Some(other.name.clone()),
            QuestionKind::NameToElectronConfig => {
                if other.electron_config.is_empty() {
                    None
                } else {
                    Some(other.electron_config.clone())
                }
            }
            QuestionKind::NameToProduction => set
                .production(&other.symbol)?
                .summary()
                .map(str::to_string),
        }
    }
}

// --- 3. LIVE QUESTION ---

/// One generated question. `options` is empty in free-response format;
/// in multiple choice it holds exactly `OPTION_COUNT` entries with the
/// correct answer among them.
#[derive(Debug, Clone)]
pub struct Question {
    pub kind: QuestionKind,
    pub symbol: String,
    pub prompt: String,
    pub answer: String,
    pub options: Vec<String>,
}

// --- 4. GENERATION ---

/// Draws a question for the given pool.
///
/// Kind and element are independent draws each attempt; an attempt that
/// pairs a kind with an element missing its data is simply redrawn. The
/// retry cap keeps generation total; on exhaustion it falls back to
/// symbol-to-name, which every element can answer. Returns None only
/// for an empty pool.
pub fn generate(
    set: &ElementSet,
    pool: &[&Element],
    format: QuizFormat,
    rng: &mut impl Rng,
) -> Option<Question> {
    if pool.is_empty() {
        return None;
    }

    let mut picked = None;
    for _ in 0..GENERATION_RETRY_CAP {
        let kind = *ALL_KINDS.choose(rng)?;
        let element = *pool.choose(rng)?;
        if let Some((prompt, answer)) = kind.build(set, element) {
            picked = Some((kind, element, prompt, answer));
            break;
        }
    }
    let (kind, element, prompt, answer) = match picked {
        Some(p) => p,
        None => {
            let element = *pool.choose(rng)?;
            let (prompt, answer) = QuestionKind::SymbolToName.build(set, element)?;
            (QuestionKind::SymbolToName, element, prompt, answer)
        }
    };

    let options = match format {
        QuizFormat::MultipleChoice => build_options(set, kind, &answer, rng),
        QuizFormat::FreeResponse => Vec::new(),
    };

    Some(Question {
        kind,
        symbol: element.symbol.clone(),
        prompt,
        answer,
        options,
    })
}

/// Collects the option set: the correct answer first, then random
/// other elements' fields accepted while non-empty and unseen, padded
/// with the sentinel once the draw budget is spent, shuffled last.
fn build_options(
    set: &ElementSet,
    kind: QuestionKind,
    answer: &str,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut options = vec![answer.to_string()];
    for _ in 0..DISTRACTOR_BUDGET {
        if options.len() == OPTION_COUNT {
            break;
        }
        let Some(other) = set.all().choose(rng) else {
            break;
        };
        if let Some(candidate) = kind.option_for(set, other) {
            if !candidate.is_empty() && !options.contains(&candidate) {
                options.push(candidate);
            }
        }
    }
    while options.len() < OPTION_COUNT {
        options.push(FILL_OPTION.to_string());
    }
    options.shuffle(rng);
    options
}
