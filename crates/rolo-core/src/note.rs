use serde::{Deserialize, Serialize};

/// A free-form note with optional text tags. No uniqueness rules apply to
/// either content or tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Note {
    pub fn new(content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            content: content.into(),
            tags,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn has_tag_is_exact_match() {
        let note = Note::new("call the bank", vec!["money".to_string()]);
        assert!(note.has_tag("money"));
        assert!(!note.has_tag("mone"));
        assert!(!note.has_tag("Money"));
    }
}
