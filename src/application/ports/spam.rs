// src/application/ports/spam.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct SpamReport {
    pub is_spam: bool,
    pub confidence: f32,
    pub detected_patterns: Vec<String>,
}

/// Spam classification capability. A detector failure surfaces as an
/// external-service error, never as "not spam".
#[async_trait]
pub trait SpamDetector: Send + Sync {
    async fn is_spam(&self, content: &str) -> ApplicationResult<bool>;
    async fn analyze_patterns(&self, content: &str) -> ApplicationResult<SpamReport>;
}
