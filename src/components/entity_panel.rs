use leptos::prelude::*;

use crate::api::{EntityDetails, fetch_entity};
use crate::components::force_graph::{Node, PreparedGraph};
use crate::config::DashboardConfig;

#[component]
fn NodeFacts(node: Node) -> impl IntoView {
	view! {
		<dl class="node-facts">
			<dt>"Importance"</dt>
			<dd>{format!("{:.2}", node.importance)}</dd>
			<dt>"Frequency"</dt>
			<dd>{node.frequency}</dd>
			<dt>"Degree"</dt>
			<dd>{node.degree}</dd>
			<dt>"Cluster"</dt>
			<dd>{node.component.map(|c| c.to_string()).unwrap_or_else(|| "-".into())}</dd>
		</dl>
	}
}

#[component]
fn Details(details: EntityDetails) -> impl IntoView {
	let relationships = details
		.relationships
		.into_iter()
		.map(|rel| {
			view! {
				<li>
					<span class="name">{rel.target}</span>
					<span class="meta">{format!("{} shared articles", rel.shared_articles)}</span>
				</li>
			}
		})
		.collect_view();
	let articles = details
		.related_articles
		.into_iter()
		.map(|article| {
			view! {
				<li>
					<a href=article.link target="_blank" rel="noopener">
						{article.title}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<h3>"Co-occurs with"</h3>
		<ul class="relationships">{relationships}</ul>
		<h3>{format!("Articles ({})", details.total_articles)}</h3>
		<ul class="related-articles">{articles}</ul>
	}
}

/// Facts about the selected entity, plus its neighborhood from the API.
#[component]
pub fn EntityPanel(
	#[prop(into)] graph: Signal<Option<PreparedGraph>>,
	#[prop(into)] selected: Signal<Option<String>>,
) -> impl IntoView {
	let config = use_context::<DashboardConfig>().unwrap_or_default();
	let details = LocalResource::new(move || {
		let (config, name) = (config.clone(), selected.get());
		async move {
			match name {
				Some(name) => fetch_entity(config, name).await.map(Some),
				None => Ok(None),
			}
		}
	});

	let node = move || {
		let id = selected.get()?;
		graph.with(|g| g.as_ref().and_then(|g| g.node(&id).cloned()))
	};

	view! {
		<aside class="entity-panel">
			{move || match selected.get() {
				None => view! { <p class="hint">"Select an entity to see its connections."</p> }.into_any(),
				Some(name) => view! { <h2>{name}</h2> }.into_any(),
			}}
			{move || node().map(|node| view! { <NodeFacts node=node /> })}
			{move || match details.get() {
				None => view! { <p class="loading">"Loading…"</p> }.into_any(),
				Some(Ok(Some(details))) => view! { <Details details=details /> }.into_any(),
				Some(Ok(None)) => view! { <span></span> }.into_any(),
				Some(Err(err)) => view! { <p class="error">{err.to_string()}</p> }.into_any(),
			}}
		</aside>
	}
}
