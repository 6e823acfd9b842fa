//! Response bodies of the knowledge API.
//!
//! Numeric fields the backend may leave null default instead of failing the
//! whole response.

use serde::{Deserialize, Deserializer, Serialize};

use crate::components::force_graph::{GraphPayload, GraphStats};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /api/stats`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleStats {
	#[serde(default)]
	pub total_articles: usize,
	#[serde(default)]
	pub articles_with_results: usize,
	#[serde(default)]
	pub articles_without_results: usize,
}

/// One row of the importance ranking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TopEntity {
	pub name: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub importance: f64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub frequency: u32,
	#[serde(default, deserialize_with = "null_as_default")]
	pub degree: u32,
}

/// `GET /api/knowledge-graph`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGraphResponse {
	#[serde(default)]
	pub graph: GraphPayload,
	#[serde(default)]
	pub top_entities: Vec<TopEntity>,
	#[serde(default)]
	pub stats: GraphStats,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
	pub target: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub weight: f64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub co_occurrence_count: u32,
	#[serde(default, deserialize_with = "null_as_default")]
	pub shared_articles: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedArticle {
	pub article_id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub link: String,
}

/// `GET /api/knowledge-graph/entity/<name>`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityDetails {
	pub entity: String,
	#[serde(default)]
	pub relationships: Vec<Relationship>,
	#[serde(default)]
	pub related_articles: Vec<RelatedArticle>,
	#[serde(default)]
	pub total_articles: usize,
}

/// Overall impact rating inside [`Insights`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssessment {
	#[serde(default, deserialize_with = "null_as_default")]
	pub level: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub reasoning: String,
}

/// `GET /api/ai/insights`, generated by the hosted LLM (or its canned fallback).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
	#[serde(default, deserialize_with = "null_as_default")]
	pub trends: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub gaps: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub emerging_areas: Vec<String>,
	#[serde(default)]
	pub impact_assessment: Option<ImpactAssessment>,
}

impl Insights {
	pub fn is_empty(&self) -> bool {
		self.trends.is_empty()
			&& self.gaps.is_empty()
			&& self.emerging_areas.is_empty()
			&& self.impact_assessment.is_none()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn knowledge_graph_response_decodes() {
		let body = r#"{
			"graph": {
				"nodes": [
					{"id": "microgravity", "label": "microgravity", "size": 42.5, "frequency": 30, "degree": 12},
					{"id": "bone", "label": "bone", "size": 5, "frequency": 9, "degree": 3}
				],
				"edges": [
					{"source": "microgravity", "target": "bone", "weight": 4.0, "co_occurrence_count": 4}
				],
				"stats": {"total_nodes": 2, "total_edges": 1, "density": 1.0}
			},
			"top_entities": [
				{"name": "microgravity", "importance": 8.5, "frequency": 30, "degree": 12},
				{"name": "bone", "importance": null, "frequency": null, "degree": 3}
			],
			"stats": {"total_nodes": 2, "total_edges": 1, "density": 1.0}
		}"#;

		let response: KnowledgeGraphResponse = serde_json::from_str(body).unwrap();
		assert_eq!(response.graph.nodes.len(), 2);
		assert_eq!(response.graph.nodes[0].size, Some(42.5));
		assert_eq!(response.graph.nodes[0].importance, None);
		assert_eq!(response.graph.edges[0].weight, Some(4.0));
		assert_eq!(response.top_entities[1].importance, 0.0);
		assert_eq!(response.top_entities[1].frequency, 0);
		assert_eq!(response.stats.total_edges, 1);
	}

	#[test]
	fn entity_details_tolerate_missing_sections() {
		let details: EntityDetails = serde_json::from_str(r#"{"entity": "radiation"}"#).unwrap();
		assert_eq!(details.entity, "radiation");
		assert!(details.relationships.is_empty());
		assert_eq!(details.total_articles, 0);
	}

	#[test]
	fn node_without_id_still_decodes() {
		// Rejected later, with a position, during layout preparation.
		let payload: GraphPayload =
			serde_json::from_str(r#"{"nodes": [{"label": "orphan"}], "edges": []}"#).unwrap();
		assert_eq!(payload.nodes[0].id, None);
	}

	#[test]
	fn fallback_insights_decode() {
		let body = r#"{
			"trends": [
				"Focus on microgravity effects on biological systems",
				"Increasing research on cellular and molecular responses",
				"Growing interest in space medicine applications"
			],
			"gaps": [
				"Long-term space mission effects",
				"Individual variation in space adaptation",
				"Countermeasure effectiveness"
			],
			"emerging_areas": [
				"Personalized space medicine",
				"AI-driven space biology research",
				"Synthetic biology in space"
			],
			"impact_assessment": {
				"level": "high",
				"reasoning": "Research addresses critical human spaceflight challenges"
			}
		}"#;

		let insights: Insights = serde_json::from_str(body).unwrap();
		assert_eq!(insights.trends.len(), 3);
		assert_eq!(insights.gaps[2], "Countermeasure effectiveness");
		assert_eq!(insights.emerging_areas[0], "Personalized space medicine");
		let impact = insights.impact_assessment.unwrap();
		assert_eq!(impact.level, "high");
		assert!(impact.reasoning.starts_with("Research addresses"));
	}

	#[test]
	fn partial_insights_default_missing_sections() {
		// LLM output sometimes omits keys or returns nulls.
		let insights: Insights =
			serde_json::from_str(r#"{"trends": ["bone loss"], "gaps": null, "impact_assessment": {"level": "medium"}}"#)
				.unwrap();
		assert_eq!(insights.trends, vec!["bone loss".to_string()]);
		assert!(insights.gaps.is_empty());
		assert!(insights.emerging_areas.is_empty());
		assert_eq!(insights.impact_assessment.unwrap().reasoning, "");

		let empty: Insights = serde_json::from_str("{}").unwrap();
		assert!(empty.is_empty());
	}
}
