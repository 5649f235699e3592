use askama::Template;

use super::dto::RecommendationResult;

#[derive(Template)]
#[template(path = "recommendations.html")]
pub struct RecommendationsTemplate {
    pub result: RecommendationResult,
}
