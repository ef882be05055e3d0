/// Reasons a session configuration is refused before the session starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config has no questions")]
    NoChallenges,

    #[error("question {ordinal} has a blank answer")]
    BlankAnswer { ordinal: usize },

    #[error("question {ordinal} has a blank question text")]
    BlankQuestion { ordinal: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_question() {
        let err = ConfigError::BlankAnswer { ordinal: 3 };
        assert_eq!(err.to_string(), "question 3 has a blank answer");
        assert_eq!(ConfigError::NoChallenges.to_string(), "config has no questions");
    }

    #[test]
    fn parse_errors_convert() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
