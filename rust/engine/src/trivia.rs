use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::TriviaError;

/// Questions sampled from each level of the bank.
pub const QUESTIONS_PER_LEVEL: usize = 5;

/// The classic 25-step prize ladder, in play order.
pub const DEFAULT_PRIZE_LADDER: [u64; 25] = [
    100, 200, 300, 400, 500, 750, 1_000, 1_500, 2_500, 5_000, 7_500, 10_000, 15_000, 20_000,
    30_000, 50_000, 75_000, 100_000, 150_000, 250_000, 350_000, 500_000, 650_000, 800_000,
    1_000_000,
];

/// One multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_text: String,
    /// The four answer options shown to players.
    pub options: Vec<String>,
    /// One of `options`, verbatim.
    pub correct_answer: String,
}

/// A block of questions under one difficulty level. The level number is the
/// first run of digits inside `level_name` ("Level 3", "3 - hard", ...).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelBlock {
    pub level_name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// The on-disk question bank: an ordered list of level blocks.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    blocks: Vec<LevelBlock>,
}

impl QuestionBank {
    pub fn new(blocks: Vec<LevelBlock>) -> Self {
        Self { blocks }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TriviaError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self, TriviaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TriviaError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn blocks(&self) -> &[LevelBlock] {
        &self.blocks
    }
}

/// First run of decimal digits in a level name, if any.
fn level_number(name: &str) -> Option<u32> {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// How a trivia session ended.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TriviaOutcome {
    /// The question list was exhausted with at least one active player.
    Win { winners: Vec<String> },
    /// Every player was eliminated.
    Loss,
}

/// A player knocked out of the round and the prize they kept.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Eliminated {
    pub player: String,
    /// Prize of the last question they cleared; 0 when eliminated on the
    /// very first question.
    pub prize: u64,
}

/// Outcome of resolving one question round.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RoundResult {
    /// Index of the question this round resolved.
    pub question_index: usize,
    pub correct_answer: String,
    /// Players who answered correctly and stay in the game.
    pub correct: Vec<String>,
    /// Players eliminated this round (wrong answer or no answer).
    pub eliminated: Vec<Eliminated>,
    /// Set when this round ended the session.
    pub outcome: Option<TriviaOutcome>,
}

/// A "Who Wants to Be a Millionaire" session: an ordered question list, a
/// prize ladder, the set of players still in, and per-round answer
/// bookkeeping.
///
/// The session keeps no clock. Round timeouts belong to the presentation
/// layer: [`TriviaSession::resolve_round`] may be called at any moment and
/// treats everyone who has not answered as wrong.
#[derive(Debug)]
pub struct TriviaSession {
    questions: Vec<Question>,
    prize_ladder: Vec<u64>,
    current: usize,
    active: BTreeSet<String>,
    answered_this_round: BTreeSet<String>,
    correct_this_round: BTreeSet<String>,
    prizes: BTreeMap<String, u64>,
    outcome: Option<TriviaOutcome>,
}

impl TriviaSession {
    /// Builds a session with the default ladder and per-level quota.
    pub fn new<I, S>(bank: &QuestionBank, players: I, seed: Option<u64>) -> Result<Self, TriviaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_settings(
            bank,
            players,
            DEFAULT_PRIZE_LADDER.to_vec(),
            QUESTIONS_PER_LEVEL,
            seed,
        )
    }

    /// Builds a session: group bank questions by level, sample up to
    /// `per_level_quota` per level 1..=5 without replacement, concatenate in
    /// level order and truncate to the ladder length.
    pub fn with_settings<I, S>(
        bank: &QuestionBank,
        players: I,
        prize_ladder: Vec<u64>,
        per_level_quota: usize,
        seed: Option<u64>,
    ) -> Result<Self, TriviaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let active: BTreeSet<String> = players.into_iter().map(Into::into).collect();
        if active.is_empty() {
            return Err(TriviaError::NoPlayers);
        }

        let mut by_level: BTreeMap<u32, Vec<Question>> = BTreeMap::new();
        for block in bank.blocks() {
            if let Some(level) = level_number(&block.level_name) {
                if (1..=5).contains(&level) {
                    by_level
                        .entry(level)
                        .or_default()
                        .extend(block.questions.iter().cloned());
                }
            }
        }

        let mut rng = ChaCha20Rng::seed_from_u64(seed.unwrap_or(0x7121_41A0));
        let mut questions = Vec::new();
        for level in 1..=5 {
            if let Some(mut pool) = by_level.remove(&level) {
                pool.shuffle(&mut rng);
                pool.truncate(per_level_quota);
                questions.extend(pool);
            }
        }
        questions.truncate(prize_ladder.len());
        if questions.is_empty() {
            return Err(TriviaError::NoQuestions);
        }

        Ok(Self {
            questions,
            prize_ladder,
            current: 0,
            active,
            answered_this_round: BTreeSet::new(),
            correct_this_round: BTreeSet::new(),
            prizes: BTreeMap::new(),
            outcome: None,
        })
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn current_prize(&self) -> Option<u64> {
        self.prize_ladder.get(self.current).copied()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn active_players(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    pub fn is_active(&self, player: &str) -> bool {
        self.active.contains(player)
    }

    /// Prizes retained by eliminated players so far.
    pub fn eliminated_prizes(&self) -> &BTreeMap<String, u64> {
        &self.prizes
    }

    pub fn outcome(&self) -> Option<&TriviaOutcome> {
        self.outcome.as_ref()
    }

    /// Locks in `player`'s answer for the current question. Each active
    /// player answers at most once per round; later attempts are rejected.
    pub fn submit_answer(&mut self, player: &str, option: &str) -> Result<(), TriviaError> {
        if self.outcome.is_some() {
            return Err(TriviaError::Finished);
        }
        let question = self
            .questions
            .get(self.current)
            .ok_or(TriviaError::NoQuestion {
                index: self.current,
                total: self.questions.len(),
            })?;
        if !self.active.contains(player) {
            return Err(TriviaError::NotInRound(player.to_string()));
        }
        if !self.answered_this_round.insert(player.to_string()) {
            return Err(TriviaError::AlreadyAnswered(player.to_string()));
        }
        if option == question.correct_answer {
            self.correct_this_round.insert(player.to_string());
        }
        Ok(())
    }

    /// Resolves the current round with whatever answers have accumulated:
    /// every active player outside the correct set is eliminated and keeps
    /// the prize of the previous question (0 on the first). Ends the session
    /// when nobody survives (loss) or the question list runs out (win).
    pub fn resolve_round(&mut self) -> Result<RoundResult, TriviaError> {
        if self.outcome.is_some() {
            return Err(TriviaError::Finished);
        }
        let question = self
            .questions
            .get(self.current)
            .ok_or(TriviaError::NoQuestion {
                index: self.current,
                total: self.questions.len(),
            })?;
        let correct_answer = question.correct_answer.clone();
        let question_index = self.current;

        let retained = if self.current > 0 {
            self.prize_ladder[self.current - 1]
        } else {
            0
        };
        let losers: Vec<String> = self
            .active
            .iter()
            .filter(|p| !self.correct_this_round.contains(*p))
            .cloned()
            .collect();
        let mut eliminated = Vec::with_capacity(losers.len());
        for player in losers {
            self.active.remove(&player);
            self.prizes.insert(player.clone(), retained);
            eliminated.push(Eliminated {
                player,
                prize: retained,
            });
        }
        let correct: Vec<String> = self.correct_this_round.iter().cloned().collect();
        self.answered_this_round.clear();
        self.correct_this_round.clear();

        let outcome = if self.active.is_empty() {
            Some(TriviaOutcome::Loss)
        } else {
            self.current += 1;
            if self.current >= self.questions.len() {
                Some(TriviaOutcome::Win {
                    winners: self.active.iter().cloned().collect(),
                })
            } else {
                None
            }
        };
        self.outcome = outcome.clone();

        Ok(RoundResult {
            question_index,
            correct_answer,
            correct,
            eliminated,
            outcome,
        })
    }
}
