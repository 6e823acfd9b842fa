//! Dashboard configuration.
//!
//! CSR builds have no process environment at runtime, so the API location is
//! baked in at compile time from `DASHBOARD_API_BASE`.

const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Settings shared through context with every dashboard component.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
	/// Base URL of the knowledge API, without a trailing slash.
	pub api_base: String,
	/// How many ranked entities the sidebar lists.
	pub top_entities: usize,
	/// Radius of the ring cluster centers are placed on, in graph units.
	pub cluster_radius: f64,
	/// Fraction of the distance to its cluster center a node covers per second.
	pub cluster_strength: f32,
	/// Nodes ranked this high by importance always show their label.
	pub label_count: usize,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			api_base: DEFAULT_API_BASE.into(),
			top_entities: 20,
			cluster_radius: 220.0,
			cluster_strength: 0.6,
			label_count: 15,
		}
	}
}

impl DashboardConfig {
	/// Resolve the configuration for this build.
	pub fn from_env() -> Self {
		Self::default().with_api_base(option_env!("DASHBOARD_API_BASE"))
	}

	fn with_api_base(mut self, base: Option<&str>) -> Self {
		if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
			self.api_base = base.trim_end_matches('/').to_string();
		}
		self
	}

	/// Absolute URL for an API path such as `/api/stats`.
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.api_base, path.trim_start_matches('/'))
	}
}
