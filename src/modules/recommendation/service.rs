use super::dto::{RecommendationRequest, RecommendationResult};
use crate::common::error::AppError;
use crate::state::AppState;
use tracing::debug;

pub struct RecommendationService;

impl RecommendationService {
    pub async fn recommend(
        state: &AppState,
        req: RecommendationRequest,
    ) -> Result<RecommendationResult, AppError> {
        debug!(preferences = %req.preferences, default = req.is_default(), "Requesting recommendations");

        let text = state
            .openai
            .complete(&req.messages())
            .await
            .map_err(AppError::Recommendation)?;

        Ok(RecommendationResult {
            preferences: req.preferences,
            text,
        })
    }
}
