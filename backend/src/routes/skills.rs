use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::skill::{find_category, skills_in_category};
use crate::models::{Skill, SkillCategory, SKILLS, SKILL_CATEGORIES};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_skills))
}

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<&'static Skill>,
    pub categories: Vec<&'static SkillCategory>,
}

/// GET /api/skills?category=Frontend
async fn list_skills(Query(query): Query<SkillsQuery>) -> Result<Json<SkillsResponse>, AppError> {
    info!("GET /api/skills - category: {:?}", query.category);

    let requested = query.category.as_deref().map(str::trim).filter(|c| !c.is_empty());

    let response = match requested {
        Some(label) => {
            let category = find_category(label).ok_or(AppError::NotFound)?;
            SkillsResponse {
                skills: skills_in_category(SKILLS, category),
                categories: vec![category],
            }
        }
        None => SkillsResponse {
            skills: SKILLS.iter().collect(),
            categories: SKILL_CATEGORIES.iter().collect(),
        },
    };

    Ok(Json(response))
}
