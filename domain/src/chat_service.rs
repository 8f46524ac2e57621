use crate::models::{ChatRequest, ChatResponse};
use shared::types::Result;

/// Remote endpoint that answers one chat request with one response.
///
/// Implementations make a single attempt per call; retry policy, if any,
/// belongs to the caller.
pub trait ChatService {
    fn exchange(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<ChatResponse>> + Send;
}
