use leptos::prelude::*;

use crate::api::TopEntity;
use crate::components::force_graph::scale::max_of;

/// Entities ranked by importance, with bars relative to the leader.
#[component]
pub fn TopEntities(
	entities: Vec<TopEntity>,
	#[prop(into)] selected: Signal<Option<String>>,
	#[prop(into)] on_select: Callback<Option<String>>,
) -> impl IntoView {
	let max_importance = max_of(entities.iter().map(|e| e.importance));

	let rows = entities
		.into_iter()
		.enumerate()
		.map(|(rank, entity)| {
			let share = if max_importance > 0.0 {
				entity.importance / max_importance * 100.0
			} else {
				0.0
			};
			let (name, click_name) = (entity.name.clone(), entity.name.clone());
			let is_selected = move || selected.get().as_deref() == Some(name.as_str());

			view! {
				<li
					class="top-entity"
					class:selected=is_selected
					on:click=move |_| on_select.run(Some(click_name.clone()))
				>
					<span class="rank">{rank + 1}</span>
					<span class="name">{entity.name}</span>
					<span class="meta">
						{format!("freq {} · deg {}", entity.frequency, entity.degree)}
					</span>
					<div class="bar">
						<div class="bar-fill" style=format!("width: {:.1}%", share)></div>
					</div>
				</li>
			}
		})
		.collect_view();

	view! {
		<section class="top-entities">
			<h2>"Top entities"</h2>
			<ol>{rows}</ol>
		</section>
	}
}
