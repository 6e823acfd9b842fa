//! Thin client for the knowledge API.

mod types;

pub use types::{
	ArticleStats, EntityDetails, ImpactAssessment, Insights, KnowledgeGraphResponse, RelatedArticle,
	Relationship, TopEntity,
};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config::DashboardConfig;
use crate::error::{AppError, Result};

async fn get_json<T: DeserializeOwned>(url: String) -> Result<T> {
	debug!("GET {}", url);
	let window = web_sys::window().ok_or_else(|| AppError::Network("no window".into()))?;
	let response = JsFuture::from(window.fetch_with_str(&url))
		.await
		.map_err(AppError::from_js)?;
	let response: Response = response.dyn_into().map_err(AppError::from_js)?;

	if !response.ok() {
		warn!("GET {} returned {}", url, response.status());
		return Err(AppError::Status {
			url,
			status: response.status(),
		});
	}

	let body = JsFuture::from(response.text().map_err(AppError::from_js)?)
		.await
		.map_err(AppError::from_js)?;
	let body = body
		.as_string()
		.ok_or_else(|| AppError::Decode(format!("{} returned a non-text body", url)))?;
	Ok(serde_json::from_str(&body)?)
}

pub async fn fetch_stats(config: DashboardConfig) -> Result<ArticleStats> {
	get_json(config.endpoint("/api/stats")).await
}

pub async fn fetch_knowledge_graph(config: DashboardConfig) -> Result<KnowledgeGraphResponse> {
	get_json(config.endpoint("/api/knowledge-graph")).await
}

/// Relationships and related articles for one entity.
pub async fn fetch_entity(config: DashboardConfig, name: String) -> Result<EntityDetails> {
	let path = format!(
		"/api/knowledge-graph/entity/{}",
		String::from(js_sys::encode_uri_component(&name))
	);
	get_json(config.endpoint(&path)).await
}

/// AI-generated research insights. Answers 503 when the backend has no LLM key.
pub async fn fetch_insights(config: DashboardConfig) -> Result<Insights> {
	get_json(config.endpoint("/api/ai/insights")).await
}
