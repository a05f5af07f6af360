use axum::{
    extract::Query,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;

use crate::careers::{career_report, CareerReport};
use crate::content::{page_content, PageContent};
use crate::render::{render_landing_page, Tab};
use crate::skills::{radar, skill_report, SkillReport, SKILLS};

#[derive(Deserialize)]
pub struct PageQuery {
    pub tab: Option<String>,
}

/// GET /
pub async fn handle_landing_page(Query(params): Query<PageQuery>) -> Html<String> {
    Html(render_landing_page(Tab::parse(params.tab.as_deref())))
}

/// GET /api/v1/content
pub async fn handle_content() -> Json<PageContent> {
    Json(page_content())
}

/// GET /api/v1/skills
pub async fn handle_skills() -> Json<SkillReport> {
    Json(skill_report())
}

/// GET /api/v1/skills/radar.svg
pub async fn handle_radar_svg() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        radar::layout(SKILLS).to_svg(),
    )
}

/// GET /api/v1/careers
pub async fn handle_careers() -> Json<CareerReport> {
    Json(career_report())
}
