use crate::application::ApplicationResult;
use crate::application::ports::spam::{SpamDetector, SpamReport};
use async_trait::async_trait;

/// Spam keywords that push a comment towards rejection. The detector fires
/// once more than `SPAM_THRESHOLD` of them occur in one comment.
const DEFAULT_KEYWORDS: &[&str] = &["خرید", "فوری", "تخفیف", "ویزا", "ارز"];

const SPAM_THRESHOLD: usize = 2;

/// Keyword-counting detector. Deliberately simple; an external
/// classification service can replace it behind the same port.
#[derive(Clone)]
pub struct KeywordSpamDetector {
    keywords: Vec<String>,
}

impl KeywordSpamDetector {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    fn matched_keywords(&self, content: &str) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|keyword| content.contains(keyword.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for KeywordSpamDetector {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl SpamDetector for KeywordSpamDetector {
    async fn is_spam(&self, content: &str) -> ApplicationResult<bool> {
        Ok(self.matched_keywords(content).len() > SPAM_THRESHOLD)
    }

    async fn analyze_patterns(&self, content: &str) -> ApplicationResult<SpamReport> {
        let detected = self.matched_keywords(content);
        let count = detected.len();
        Ok(SpamReport {
            is_spam: count > SPAM_THRESHOLD,
            confidence: (count as f32 / 5.0).min(1.0),
            detected_patterns: detected,
        })
    }
}
