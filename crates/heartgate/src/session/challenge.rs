use crate::config::{ConfigError, SessionConfig};

/// One immutable challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    /// Zero-based position in the registry.
    pub ordinal: usize,
    pub label: String,
    pub question: String,
    pub expected_answer: String,
    pub failure_message: String,
}

impl Challenge {
    pub fn new(
        ordinal: usize,
        label: impl Into<String>,
        question: impl Into<String>,
        expected_answer: impl Into<String>,
        failure_message: impl Into<String>,
    ) -> Self {
        Self {
            ordinal,
            label: label.into(),
            question: question.into(),
            expected_answer: expected_answer.into(),
            failure_message: failure_message.into(),
        }
    }

    /// The question as it appears in the terminal.
    pub fn prompt_line(&self) -> String {
        format!("> {}", self.question)
    }
}

/// Fixed, non-empty, ordered list of challenges.
#[derive(Debug, Clone)]
pub struct ChallengeRegistry {
    challenges: Vec<Challenge>,
}

impl ChallengeRegistry {
    /// Build from a validated config.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let challenges = config
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                Challenge::new(i, &q.challenge, &q.question, &q.answer, &q.error_message)
            })
            .collect();
        Ok(Self { challenges })
    }

    /// Build directly from challenges. Refuses an empty list.
    pub fn new(challenges: Vec<Challenge>) -> Result<Self, ConfigError> {
        if challenges.is_empty() {
            return Err(ConfigError::NoChallenges);
        }
        Ok(Self { challenges })
    }

    pub fn get(&self, index: usize) -> Option<&Challenge> {
        self.challenges.get(index)
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.challenges.len() - 1
    }

    pub fn is_last(&self, index: usize) -> bool {
        index == self.last_index()
    }
}
