//! The outcome of one review.

use crate::error::InferenceError;
use std::fmt;

/// What the pipeline hands back for one image.
///
/// The answered text is opaque: it is whatever the model wrote (minus code
/// fences when normalization is on) and is never parsed here.
#[derive(Debug)]
pub enum Verdict {
    /// The model answered with this text.
    Answered(String),
    /// The inference call failed; the error replaces the answer.
    Unavailable(InferenceError),
}

impl Verdict {
    /// Whether the model produced an answer.
    pub fn is_answered(&self) -> bool {
        matches!(self, Verdict::Answered(_))
    }

    /// The model's text, if it answered.
    pub fn text(&self) -> Option<&str> {
        match self {
            Verdict::Answered(text) => Some(text),
            Verdict::Unavailable(_) => None,
        }
    }
}

/// Displays the answer verbatim, or the error description.
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Answered(text) => f.write_str(text),
            Verdict::Unavailable(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answered_displays_verbatim() {
        let verdict = Verdict::Answered("{\"decision\": \"out\"}\n".to_string());
        assert!(verdict.is_answered());
        assert_eq!(verdict.to_string(), "{\"decision\": \"out\"}\n");
        assert_eq!(verdict.text(), Some("{\"decision\": \"out\"}\n"));
    }

    #[test]
    fn test_unavailable_displays_error() {
        let verdict = Verdict::Unavailable(InferenceError::Status {
            code: 429,
            body: "rate limited".to_string(),
        });
        assert!(!verdict.is_answered());
        assert_eq!(verdict.text(), None);
        assert!(verdict.to_string().contains("429"));
    }
}
