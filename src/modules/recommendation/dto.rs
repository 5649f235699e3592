use serde::Deserialize;
use utoipa::IntoParams;

use crate::infrastructure::openai::models::ChatMessage;

pub const DEFAULT_PREFERENCES: &str = "action, adventure";

const SYSTEM_PROMPT: &str = "You are a knowledgeable film critic. Suggest a handful of movies \
that match the viewer's preferences, one per line, each with a short reason.";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendationParams {
    /// Free-text taste description, e.g. "slow-burn sci-fi, 70s thrillers"
    pub preferences: Option<String>,
}

/// One outbound generation request. Absent or blank preferences fall back to
/// [`DEFAULT_PREFERENCES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub preferences: String,
}

impl RecommendationRequest {
    pub fn from_params(params: RecommendationParams) -> Self {
        let preferences = params
            .preferences
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PREFERENCES.to_string());
        Self { preferences }
    }

    pub fn is_default(&self) -> bool {
        self.preferences == DEFAULT_PREFERENCES
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!(
                "Recommend movies based on the following preferences: {}.",
                self.preferences
            )),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationResult {
    pub preferences: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::openai::models::ChatRole;

    #[test]
    fn absent_preferences_use_default() {
        let req = RecommendationRequest::from_params(RecommendationParams::default());
        assert_eq!(req.preferences, DEFAULT_PREFERENCES);
        assert!(req.is_default());

        let req = RecommendationRequest::from_params(RecommendationParams {
            preferences: Some("   ".into()),
        });
        assert!(req.is_default());
    }

    #[test]
    fn messages_are_system_then_user() {
        let req = RecommendationRequest::from_params(RecommendationParams {
            preferences: Some(" noir ".into()),
        });
        let messages = req.messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[1].role, ChatRole::User);
        assert_eq!(
            messages[1].content,
            "Recommend movies based on the following preferences: noir."
        );
    }
}
