use serde::{Deserialize, Serialize};

/// A node as the API sends it. Only `id` is structurally required.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
	pub id: Option<String>,
	#[serde(default)]
	pub label: Option<String>,
	#[serde(default)]
	pub size: Option<f64>,
	#[serde(default)]
	pub importance: Option<f64>,
	#[serde(default)]
	pub frequency: Option<u32>,
	#[serde(default)]
	pub degree: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEdge {
	pub source: String,
	pub target: String,
	#[serde(default)]
	pub weight: Option<f64>,
}

/// Aggregate numbers the API reports alongside the graph.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
	#[serde(default)]
	pub total_nodes: usize,
	#[serde(default)]
	pub total_edges: usize,
	#[serde(default)]
	pub density: f64,
}

/// The `graph` object of the knowledge-graph endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
	#[serde(default)]
	pub nodes: Vec<RawNode>,
	#[serde(default)]
	pub edges: Vec<RawEdge>,
	#[serde(default)]
	pub stats: Option<GraphStats>,
}

/// Canonical node with every default applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: String,
	pub label: String,
	pub importance: f64,
	pub frequency: u32,
	pub degree: u32,
	/// Cluster id, set once components are labeled.
	pub component: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub source: String,
	pub target: String,
	pub weight: f64,
	/// Layout-only connector between clusters.
	pub synthetic: bool,
}

/// Nodes and edges ready for the force simulation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreparedGraph {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

impl PreparedGraph {
	/// Distinct cluster ids, ascending.
	pub fn component_ids(&self) -> Vec<u32> {
		let mut ids: Vec<u32> = self.nodes.iter().filter_map(|n| n.component).collect();
		ids.sort_unstable();
		ids.dedup();
		ids
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Edges that came from the API.
	pub fn semantic_edges(&self) -> impl Iterator<Item = &Edge> {
		self.edges.iter().filter(|e| !e.synthetic)
	}
}

impl From<&Node> for RawNode {
	fn from(node: &Node) -> Self {
		RawNode {
			id: Some(node.id.clone()),
			label: Some(node.label.clone()),
			size: None,
			importance: Some(node.importance),
			frequency: Some(node.frequency),
			degree: Some(node.degree),
		}
	}
}

impl From<&Edge> for RawEdge {
	fn from(edge: &Edge) -> Self {
		RawEdge {
			source: edge.source.clone(),
			target: edge.target.clone(),
			weight: Some(edge.weight),
		}
	}
}
