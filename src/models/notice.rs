use std::fmt;

use crate::utils::errors::SubmissionError;

/// A title and message shown to the user once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(deck_id: u64, title: &str) -> Self {
        Notice {
            title: "Deck submitted".to_string(),
            message: format!("`{title}` was uploaded as deck #{deck_id}."),
            is_error: false,
        }
    }
}

impl From<&SubmissionError> for Notice {
    fn from(error: &SubmissionError) -> Self {
        let title = match error {
            SubmissionError::IllegalDeckSize { .. } => "Illegal deck",
            SubmissionError::MissingTitle
            | SubmissionError::MissingCommander
            | SubmissionError::DuplicatePartner(_)
            | SubmissionError::Catalog(_) => "Incomplete submission",
            SubmissionError::PopulateFailed { .. } | SubmissionError::Api(_) => "Upload failed",
        };

        Notice {
            title: title.to_string(),
            message: error.to_string(),
            is_error: true,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_deck_notice() {
        let error = SubmissionError::IllegalDeckSize {
            total: 99,
            expected: 100,
        };
        let notice = Notice::from(&error);
        assert!(notice.is_error);
        assert_eq!(notice.title, "Illegal deck");
        assert_eq!(notice.message, "Deck has 99 cards, it needs exactly 100.");
    }

    #[test]
    fn test_success_notice() {
        let notice = Notice::success(26702, "Bird Gang");
        assert!(!notice.is_error);
        assert_eq!(notice.to_string(), "Deck submitted\n`Bird Gang` was uploaded as deck #26702.");
    }
}
