//! Pure state-transition logic for one guess.
//!
//! Every function here is a pure function of the session value and the
//! input; persistence is decided by the caller from the returned
//! [`SessionFate`]. The illustration stage index is computed and clamped
//! here, not in the rendering layer.

use std::collections::BTreeSet;

use hangbot_types::game::{GameSession, MAX_ATTEMPTS};

use crate::game::gallery::GALLOWS;

/// Placeholder shown for a letter that has not been revealed yet.
const PLACEHOLDER: char = '_';

/// Result of applying one guess to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not exactly one alphabetic character.
    Invalid,
    /// The letter was already attempted; nothing changed.
    AlreadyGuessed(char),
    /// Letter occurs in the word, word not yet complete.
    Correct { mask: String, stage: usize },
    /// Letter does not occur in the word, attempts still left.
    Wrong {
        mask: String,
        attempts_remaining: u32,
        stage: usize,
    },
    /// All letters revealed; the full word is reported.
    Won { word: String },
    /// Attempts exhausted; the secret word is revealed.
    Lost { word: String, stage: usize },
}

/// What the caller must do with the session after a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFate {
    /// Session untouched; the stored record must stay bit-for-bit unchanged.
    Keep,
    /// Persist the updated session.
    Persist(GameSession),
    /// The game ended; delete the session.
    Delete,
}

/// Outcome plus the session's fate, returned by [`apply_guess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub outcome: GuessOutcome,
    pub fate: SessionFate,
}

/// Render the partially-revealed word: one slot per letter, guessed letters
/// shown, the rest as placeholders, slots joined by single spaces.
pub fn mask(word: &str, guessed: &BTreeSet<char>) -> String {
    let slots: Vec<String> = word
        .chars()
        .map(|letter| {
            if guessed.contains(&letter) {
                letter.to_string()
            } else {
                PLACEHOLDER.to_string()
            }
        })
        .collect();
    slots.join(" ")
}

/// Illustration stage for the current attempt budget: `7 - attempts_remaining`,
/// clamped to the gallery's valid range.
pub fn stage(attempts_remaining: u32) -> usize {
    let wrong_guesses = MAX_ATTEMPTS.saturating_sub(attempts_remaining) as usize;
    wrong_guesses.min(GALLOWS.len() - 1)
}

/// Apply one guess to an in-progress session.
///
/// The input is trimmed and lowercased before validation; anything other
/// than exactly one alphabetic character is rejected without state change.
pub fn apply_guess(session: &GameSession, input: &str) -> GuessStep {
    let normalized: Vec<char> = input.trim().to_lowercase().chars().collect();
    let letter = match normalized.as_slice() {
        [letter] if letter.is_alphabetic() => *letter,
        _ => {
            return GuessStep {
                outcome: GuessOutcome::Invalid,
                fate: SessionFate::Keep,
            };
        }
    };

    if session.guessed_letters.contains(&letter) {
        return GuessStep {
            outcome: GuessOutcome::AlreadyGuessed(letter),
            fate: SessionFate::Keep,
        };
    }

    let mut updated = session.clone();
    updated.guessed_letters.insert(letter);

    if session.secret_word.contains(letter) {
        let complete = updated
            .secret_word
            .chars()
            .all(|c| updated.guessed_letters.contains(&c));
        if complete {
            return GuessStep {
                outcome: GuessOutcome::Won {
                    word: updated.secret_word,
                },
                fate: SessionFate::Delete,
            };
        }
        let rendered = mask(&updated.secret_word, &updated.guessed_letters);
        let current_stage = stage(updated.attempts_remaining);
        GuessStep {
            outcome: GuessOutcome::Correct {
                mask: rendered,
                stage: current_stage,
            },
            fate: SessionFate::Persist(updated),
        }
    } else {
        updated.attempts_remaining = updated.attempts_remaining.saturating_sub(1);
        if updated.attempts_remaining == 0 {
            return GuessStep {
                outcome: GuessOutcome::Lost {
                    word: updated.secret_word,
                    stage: stage(0),
                },
                fate: SessionFate::Delete,
            };
        }
        let rendered = mask(&updated.secret_word, &updated.guessed_letters);
        let current_stage = stage(updated.attempts_remaining);
        GuessStep {
            outcome: GuessOutcome::Wrong {
                mask: rendered,
                attempts_remaining: updated.attempts_remaining,
                stage: current_stage,
            },
            fate: SessionFate::Persist(updated),
        }
    }
}
