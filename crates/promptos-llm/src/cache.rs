//! Response cache for LLM calls

use crate::client::{LLMRequest, LLMResponse};
use async_trait::async_trait;
use dashmap::DashMap;

/// Cache for provider responses, keyed by the request content
#[async_trait]
pub trait LLMCache: Send + Sync {
    /// Look up a cached response for an identical request
    async fn get(&self, request: &LLMRequest) -> Option<LLMResponse>;

    /// Store a response for later identical requests
    async fn set(&self, request: LLMRequest, response: LLMResponse);
}

/// Concurrent in-memory cache
#[derive(Default)]
pub struct InMemoryLLMCache {
    entries: DashMap<String, LLMResponse>,
}

impl InMemoryLLMCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn cache_key(request: &LLMRequest) -> String {
        format!(
            "{}\u{1}{}\u{1}{}",
            request.model,
            request.system.as_deref().unwrap_or(""),
            request.prompt
        )
    }
}

#[async_trait]
impl LLMCache for InMemoryLLMCache {
    async fn get(&self, request: &LLMRequest) -> Option<LLMResponse> {
        self.entries
            .get(&Self::cache_key(request))
            .map(|entry| entry.clone())
    }

    async fn set(&self, request: LLMRequest, response: LLMResponse) {
        self.entries.insert(Self::cache_key(&request), response);
    }
}
