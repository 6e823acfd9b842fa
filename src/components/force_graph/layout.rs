//! Layout preparation: turns an API graph payload into a connected,
//! clustered graph the force simulation can settle.
//!
//! Three passes run in order:
//! 1. [`normalize`] applies defaults and drops edges with unknown endpoints.
//! 2. [`label_components`] tags every node with its connected component.
//! 3. [`inject_connectors`] chains one representative per component with
//!    light synthetic edges so clusters do not drift apart.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::f64::consts::PI;

use log::{debug, warn};

use super::types::{Edge, GraphPayload, Node, PreparedGraph, RawEdge, RawNode};
use crate::error::{AppError, Result};

/// Divides a raw `size` to get an importance when none is given.
pub const SIZE_TO_IMPORTANCE: f64 = 5.0;
/// Weight carried by every synthetic connector edge.
pub const SYNTHETIC_EDGE_WEIGHT: f64 = 0.1;

/// Run all three passes over a payload.
pub fn prepare_graph(payload: &GraphPayload) -> Result<PreparedGraph> {
	let (nodes, edges) = normalize(&payload.nodes, &payload.edges)?;
	let nodes = label_components(nodes, &edges);
	let edges = inject_connectors(&nodes, edges);
	debug!(
		"Prepared graph: {} nodes, {} edges ({} synthetic)",
		nodes.len(),
		edges.len(),
		edges.iter().filter(|e| e.synthetic).count()
	);
	Ok(PreparedGraph { nodes, edges })
}

/// Canonicalize raw records. Node order is preserved.
pub fn normalize(raw_nodes: &[RawNode], raw_edges: &[RawEdge]) -> Result<(Vec<Node>, Vec<Edge>)> {
	let nodes = raw_nodes
		.iter()
		.enumerate()
		.map(|(i, raw)| normalize_node(i, raw))
		.collect::<Result<Vec<_>>>()?;

	let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
	let edges: Vec<Edge> = raw_edges
		.iter()
		.filter(|e| known.contains(e.source.as_str()) && known.contains(e.target.as_str()))
		.map(|e| Edge {
			source: e.source.clone(),
			target: e.target.clone(),
			weight: e.weight.unwrap_or(1.0),
			synthetic: false,
		})
		.collect();

	let dropped = raw_edges.len() - edges.len();
	if dropped > 0 {
		warn!("Dropped {} edges referencing unknown nodes", dropped);
	}
	Ok((nodes, edges))
}

fn normalize_node(index: usize, raw: &RawNode) -> Result<Node> {
	let id = raw
		.id
		.clone()
		.ok_or_else(|| AppError::MalformedPayload(format!("node at position {} has no id", index)))?;
	let importance = raw
		.importance
		.unwrap_or_else(|| raw.size.unwrap_or(1.0).max(1.0) / SIZE_TO_IMPORTANCE);

	Ok(Node {
		label: raw.label.clone().unwrap_or_else(|| id.clone()),
		id,
		importance,
		frequency: raw.frequency.unwrap_or(0),
		degree: raw.degree.unwrap_or(0),
		component: None,
	})
}

/// Tag each node with the id of its undirected connected component.
///
/// Component ids count up from 1 in order of each component's first node.
pub fn label_components(nodes: Vec<Node>, edges: &[Edge]) -> Vec<Node> {
	let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
	for edge in edges {
		adjacency.entry(edge.source.as_str()).or_default().push(edge.target.as_str());
		adjacency.entry(edge.target.as_str()).or_default().push(edge.source.as_str());
	}

	let mut component_of: HashMap<&str, u32> = HashMap::with_capacity(nodes.len());
	let mut next = 0;
	let mut stack = Vec::new();

	for node in &nodes {
		if component_of.contains_key(node.id.as_str()) {
			continue;
		}
		next += 1;
		component_of.insert(node.id.as_str(), next);
		stack.push(node.id.as_str());

		while let Some(current) = stack.pop() {
			for &neighbor in adjacency.get(current).into_iter().flatten() {
				if !component_of.contains_key(neighbor) {
					component_of.insert(neighbor, next);
					stack.push(neighbor);
				}
			}
		}
	}

	let labels: Vec<u32> = nodes.iter().map(|n| component_of[n.id.as_str()]).collect();
	nodes
		.into_iter()
		.zip(labels)
		.map(|(node, component)| Node {
			component: Some(component),
			..node
		})
		.collect()
}

/// Append one synthetic edge between consecutive component representatives.
///
/// The representative of a component is its first node in node order, and
/// components are chained in ascending id order.
pub fn inject_connectors(nodes: &[Node], mut edges: Vec<Edge>) -> Vec<Edge> {
	let mut representatives: BTreeMap<u32, &str> = BTreeMap::new();
	for node in nodes {
		if let Some(component) = node.component {
			representatives.entry(component).or_insert(node.id.as_str());
		}
	}

	let chain: Vec<&str> = representatives.into_values().collect();
	edges.extend(chain.windows(2).map(|pair| Edge {
		source: pair[0].to_string(),
		target: pair[1].to_string(),
		weight: SYNTHETIC_EDGE_WEIGHT,
		synthetic: true,
	}));
	edges
}

/// Spread cluster centers evenly around a ring of `radius` about the origin.
///
/// A lone cluster sits at the origin.
pub fn cluster_centers(component_ids: &[u32], radius: f64) -> HashMap<u32, (f64, f64)> {
	let count = component_ids.len();
	if count <= 1 {
		return component_ids.iter().map(|&c| (c, (0.0, 0.0))).collect();
	}
	component_ids
		.iter()
		.enumerate()
		.map(|(i, &c)| {
			let angle = (i as f64) * 2.0 * PI / count as f64;
			(c, (radius * angle.cos(), radius * angle.sin()))
		})
		.collect()
}
