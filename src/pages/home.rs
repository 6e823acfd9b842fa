use leptos::prelude::*;

use crate::api::{fetch_knowledge_graph, fetch_stats};
use crate::components::force_graph::{ForceGraphCanvas, prepare_graph};
use crate::components::{EntityPanel, InsightsPanel, StatCards, TopEntities};
use crate::config::DashboardConfig;

/// Dashboard page: stats, the clustered graph, rankings, entity details and AI insights.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<DashboardConfig>().unwrap_or_default();
	let top_count = config.top_entities;

	let stats = LocalResource::new({
		let config = config.clone();
		move || fetch_stats(config.clone())
	});
	let knowledge = LocalResource::new(move || fetch_knowledge_graph(config.clone()));

	// Layout preparation runs once per fetched payload
	let prepared = Memo::new(move |_| {
		knowledge
			.get()
			.map(|response| response.and_then(|k| prepare_graph(&k.graph)))
	});

	let selected = RwSignal::new(None::<String>);
	let on_select = Callback::new(move |id: Option<String>| selected.set(id));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="dashboard">
				<header>
					<h1>"Space Biology Knowledge Graph"</h1>
				</header>

				<Transition fallback=|| view! { <p class="loading">"Loading statistics…"</p> }>
					{move || {
						let graph_stats = knowledge
							.get()
							.and_then(Result::ok)
							.map(|k| k.graph.stats.unwrap_or(k.stats))
							.unwrap_or_default();
						stats.get().map(|res| res.map(|articles| view! { <StatCards articles=articles graph=graph_stats /> }))
					}}
				</Transition>

				<div class="dashboard-body">
					<div class="graph-panel">
						{move || match prepared.get() {
							None => view! { <p class="loading">"Loading knowledge graph…"</p> }.into_any(),
							Some(Err(err)) => view! { <p class="error">{err.to_string()}</p> }.into_any(),
							Some(Ok(graph)) => view! {
								<ForceGraphCanvas
									data=Signal::stored(graph)
									selected=selected
									on_select=on_select
								/>
							}.into_any(),
						}}
						<div class="graph-overlay">
							<p class="subtitle">"Drag nodes to pin them. Scroll to zoom. Drag background to pan."</p>
						</div>
					</div>

					<div class="sidebar">
						{move || {
							knowledge.get().and_then(Result::ok).map(|k| {
								let entities = k.top_entities.into_iter().take(top_count).collect::<Vec<_>>();
								view! { <TopEntities entities=entities selected=selected on_select=on_select /> }
							})
						}}
						<EntityPanel
							graph=Signal::derive(move || prepared.get().and_then(Result::ok))
							selected=selected
						/>
						<InsightsPanel />
					</div>
				</div>
			</div>
		</ErrorBoundary>
	}
}
