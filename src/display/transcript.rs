pub const DEFAULT_PLACEHOLDER: &str = "🎯 Text will appear here...\n\n💡 Press start to begin speaking.\n\n🔊 Make sure your microphone is on.";

/// Transcript of recognized utterances.
///
/// Starts out showing a placeholder. The first utterance replaces the
/// placeholder and later ones are appended with a single space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    placeholder: String,
    text: String,
    utterances: Vec<String>,
}

impl Transcript {
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            text: placeholder.clone(),
            placeholder,
            utterances: Vec::new(),
        }
    }

    pub fn append(&mut self, utterance: &str) {
        if self.is_placeholder() {
            self.text = utterance.to_string();
        } else {
            self.text.push(' ');
            self.text.push_str(utterance);
        }
        self.utterances.push(utterance.to_string());
    }

    /// Text as currently displayed
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_placeholder(&self) -> bool {
        self.text == self.placeholder
    }

    /// Utterances in arrival order
    pub fn utterances(&self) -> &[String] {
        &self.utterances
    }

    /// Back to the placeholder, for a new session started from the UI
    pub fn clear(&mut self) {
        self.text = self.placeholder.clone();
        self.utterances.clear();
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_utterance_replaces_placeholder() {
        let mut transcript = Transcript::default();
        assert!(transcript.is_placeholder());

        transcript.append("hello");
        assert_eq!(transcript.text(), "hello");
        assert!(!transcript.is_placeholder());
    }

    #[test]
    fn test_later_utterances_are_space_separated() {
        let mut transcript = Transcript::new("...");
        transcript.append("hello");
        transcript.append("world");
        assert_eq!(transcript.text(), "hello world");
        assert_eq!(transcript.utterances(), ["hello", "world"]);
    }

    #[test]
    fn test_clear_restores_placeholder() {
        let mut transcript = Transcript::new("...");
        transcript.append("hello");
        transcript.clear();
        assert_eq!(transcript.text(), "...");
        assert!(transcript.utterances().is_empty());
    }
}
