use leptos::prelude::*;

use crate::api::ArticleStats;
use crate::components::force_graph::GraphStats;

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
	view! {
		<div class="stat-card">
			<span class="stat-value">{value}</span>
			<span class="stat-label">{label}</span>
		</div>
	}
}

/// Headline numbers for the corpus and the graph built from it.
#[component]
pub fn StatCards(articles: ArticleStats, graph: GraphStats) -> impl IntoView {
	view! {
		<section class="stat-cards">
			<StatCard label="Articles" value=articles.total_articles.to_string() />
			<StatCard label="With results" value=articles.articles_with_results.to_string() />
			<StatCard label="Without results" value=articles.articles_without_results.to_string() />
			<StatCard label="Entities" value=graph.total_nodes.to_string() />
			<StatCard label="Relationships" value=graph.total_edges.to_string() />
			<StatCard label="Density" value=format!("{:.3}", graph.density) />
		</section>
	}
}
