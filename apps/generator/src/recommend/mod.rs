//! Content Requester — asks the generative service for one book's worth of
//! structured fields, steering it away from titles already produced this run.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::GeneratorError;
use crate::llm_client::LlmClient;
use crate::models::BookContent;

pub mod prompts;

use self::prompts::{build_recommend_prompt, RECOMMEND_SYSTEM};

/// Produces one book recommendation's core fields.
///
/// `exclude` carries the titles already generated in the current run; it is
/// embedded as advisory prompt text, so callers must tolerate the service
/// returning a duplicate anyway.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, exclude: &[String]) -> Result<BookContent, GeneratorError>;
}

/// Production recommender backed by the LLM client.
pub struct LlmRecommender {
    llm: LlmClient,
}

impl LlmRecommender {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Recommender for LlmRecommender {
    async fn recommend(&self, exclude: &[String]) -> Result<BookContent, GeneratorError> {
        let prompt = build_recommend_prompt(exclude);
        debug!("Requesting recommendation, {} titles excluded", exclude.len());

        let book: BookContent = self.llm.call_json(&prompt, RECOMMEND_SYSTEM).await?;
        Ok(book)
    }
}
