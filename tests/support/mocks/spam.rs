use async_trait::async_trait;
use tahrir_core::application::ApplicationResult;
use tahrir_core::application::ports::spam::{SpamDetector, SpamReport};

/// Detector driven by an explicit pattern list; the default flags nothing.
#[derive(Default, Clone)]
pub struct StubSpamDetector {
    pub patterns: Vec<String>,
}

impl StubSpamDetector {
    pub fn flagging(patterns: &[&str]) -> Self {
        Self {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[async_trait]
impl SpamDetector for StubSpamDetector {
    async fn is_spam(&self, content: &str) -> ApplicationResult<bool> {
        Ok(self.patterns.iter().any(|p| content.contains(p.as_str())))
    }

    async fn analyze_patterns(&self, content: &str) -> ApplicationResult<SpamReport> {
        let detected: Vec<String> = self
            .patterns
            .iter()
            .filter(|p| content.contains(p.as_str()))
            .cloned()
            .collect();
        Ok(SpamReport {
            is_spam: !detected.is_empty(),
            confidence: if detected.is_empty() { 0.0 } else { 1.0 },
            detected_patterns: detected,
        })
    }
}
