//! Type/delete cycle for the rotating hero tagline.

use crate::config::ConfigError;
use crate::constants::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_idx: usize,
    char_idx: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        if let Some(i) = phrases.iter().position(|p| p.is_empty()) {
            return Err(ConfigError::EmptyPhrase(i));
        }
        Ok(Self {
            phrases,
            phrase_idx: 0,
            char_idx: 0,
            deleting: false,
        })
    }

    pub fn with_default_phrases() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
            phrase_idx: 0,
            char_idx: 0,
            deleting: false,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_idx
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Produce the next visible text and how long to wait before the next step.
    pub fn step(&mut self) -> TypingStep {
        let current = &self.phrases[self.phrase_idx];
        let len = current.chars().count();

        self.char_idx = if self.deleting {
            self.char_idx.saturating_sub(1)
        } else {
            (self.char_idx + 1).min(len)
        };
        let text: String = current.chars().take(self.char_idx).collect();

        let mut delay_ms = if self.deleting {
            DELETE_STEP_MS
        } else {
            TYPE_STEP_MS
        };
        if !self.deleting && self.char_idx == len {
            delay_ms = PHRASE_HOLD_MS;
            self.deleting = true;
        } else if self.deleting && self.char_idx == 0 {
            self.deleting = false;
            self.phrase_idx = (self.phrase_idx + 1) % self.phrases.len();
            delay_ms = PHRASE_GAP_MS;
        }

        TypingStep { text, delay_ms }
    }
}
