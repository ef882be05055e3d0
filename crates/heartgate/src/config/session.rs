use serde::{Deserialize, Serialize};

use super::ConfigError;

/// One question as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionConfig {
    /// Author-facing id. Ordering comes from the list position, not from this.
    #[serde(default)]
    pub id: Option<u32>,
    /// Header line shown above the question, e.g. "[Challenge 1: ...]".
    #[serde(alias = "label")]
    pub challenge: String,
    pub question: String,
    pub answer: String,
    #[serde(alias = "failureMessage")]
    pub error_message: String,
}

/// Everything the page needs to run a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub questions: Vec<QuestionConfig>,
    /// Milliseconds per typed character.
    #[serde(default = "default_typing_speed")]
    pub typing_speed: u32,
    /// Milliseconds before each scripted line starts typing.
    #[serde(default = "default_line_delay")]
    pub line_delay: u32,
    /// Gates every sound cue.
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    /// Emit the per-character typing cue.
    #[serde(default)]
    pub typing_sound: bool,
    /// Fixed RNG seed for the celebration. The host picks one when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_typing_speed() -> u32 {
    30
}

fn default_line_delay() -> u32 {
    500
}

fn default_true() -> bool {
    true
}

impl SessionConfig {
    /// Parse a config from a JSON string without validating it.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse and validate in one go.
    pub fn load(json: &str) -> Result<Self, ConfigError> {
        let config = Self::from_json(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the session cannot run. Ordinals in errors are 1-based.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.questions.is_empty() {
            return Err(ConfigError::NoChallenges);
        }
        for (i, q) in self.questions.iter().enumerate() {
            if q.question.trim().is_empty() {
                return Err(ConfigError::BlankQuestion { ordinal: i + 1 });
            }
            if q.answer.trim().is_empty() {
                return Err(ConfigError::BlankAnswer { ordinal: i + 1 });
            }
        }
        Ok(())
    }

    /// Per-character interval in seconds.
    pub fn typing_interval(&self) -> f32 {
        self.typing_speed as f32 / 1000.0
    }

    /// Scripted inter-line delay in seconds.
    pub fn line_delay_secs(&self) -> f32 {
        self.line_delay as f32 / 1000.0
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        let q = |id: u32, challenge: &str, question: &str, answer: &str, error: &str| QuestionConfig {
            id: Some(id),
            challenge: challenge.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            error_message: error.to_string(),
        };
        Self {
            questions: vec![
                q(
                    1,
                    "[Challenge 1: Connection Origin Verification]",
                    "Enter the exact location where we first met:",
                    "bottled",
                    "Access Denied. Invalid origin key.",
                ),
                q(
                    2,
                    "[Challenge 2: Personal Preference Authentication]",
                    "What is my favorite color?",
                    "blue",
                    "Access Denied. Preference mismatch detected.",
                ),
                q(
                    3,
                    "[Challenge 3: Date Format Validation Required]",
                    "Enter my birthday in the exact format DD/MM:",
                    "24/05",
                    "Access Denied. Date format incorrect.",
                ),
                q(
                    4,
                    "[Challenge 4: Measurement Authentication]",
                    "How big is it approx?",
                    "20",
                    "Access Denied. Size parameter invalid.",
                ),
            ],
            typing_speed: default_typing_speed(),
            line_delay: default_line_delay(),
            sound_enabled: true,
            typing_sound: false,
            seed: None,
        }
    }
}
