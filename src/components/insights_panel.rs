use leptos::prelude::*;

use crate::api::{Insights, fetch_insights};
use crate::config::DashboardConfig;
use crate::error::AppError;

fn section(title: &'static str, items: Vec<String>) -> impl IntoView {
	(!items.is_empty()).then(|| {
		view! {
			<h3>{title}</h3>
			<ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
		}
	})
}

/// Message shown in place of the insights when the request fails.
pub(crate) fn unavailable_message(err: &AppError) -> String {
	match err {
		AppError::Status { status: 503, .. } => "AI insights are not available right now.".into(),
		other => format!("Could not load AI insights: {}", other),
	}
}

#[component]
fn InsightsBody(insights: Insights) -> impl IntoView {
	if insights.is_empty() {
		return view! { <p class="hint">"No insights yet."</p> }.into_any();
	}
	let impact = insights.impact_assessment.map(|impact| {
		view! {
			<p class="impact">
				<span class=format!("impact-level {}", impact.level.to_lowercase())>{impact.level.clone()}</span>
				" "
				{impact.reasoning}
			</p>
		}
	});
	view! {
		{impact}
		{section("Trends", insights.trends)}
		{section("Gaps", insights.gaps)}
		{section("Emerging areas", insights.emerging_areas)}
	}
	.into_any()
}

/// LLM-derived research insights. Failures stay inside the panel.
#[component]
pub fn InsightsPanel() -> impl IntoView {
	let config = use_context::<DashboardConfig>().unwrap_or_default();
	let insights = LocalResource::new(move || fetch_insights(config.clone()));

	view! {
		<aside class="insights-panel">
			<h2>"AI insights"</h2>
			{move || match insights.get() {
				None => view! { <p class="loading">"Loading…"</p> }.into_any(),
				Some(Ok(insights)) => view! { <InsightsBody insights=insights /> }.into_any(),
				Some(Err(err)) => view! { <p class="error">{unavailable_message(&err)}</p> }.into_any(),
			}}
		</aside>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_ai_service_reads_as_unavailable() {
		let err = AppError::Status {
			url: "/api/ai/insights".into(),
			status: 503,
		};
		assert_eq!(unavailable_message(&err), "AI insights are not available right now.");
	}

	#[test]
	fn other_failures_keep_their_cause() {
		let err = AppError::Network("offline".into());
		let message = unavailable_message(&err);
		assert!(message.starts_with("Could not load AI insights"));
		assert!(message.contains("offline"));
	}
}
