use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::layout::cluster_centers;
use super::scale::{component_color, edge_width, max_of, node_radius};
use super::types::PreparedGraph;
use crate::config::DashboardConfig;

pub const HIT_PADDING: f64 = 6.0;
const SEED_RADIUS: f64 = 40.0;
/// Extra cluster pull on connector endpoints. `force_graph` springs every edge
/// at full strength, so this offsets the tug between clusters.
pub const CONNECTOR_PULL: f32 = 2.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: String,
	pub color: String,
	pub radius: f64,
	pub component: u32,
	pub show_label: bool,
	/// Endpoint of a synthetic connector.
	pub connector: bool,
}

/// A drawable edge. Synthetic connectors never become one.
#[derive(Clone, Copy, Debug)]
pub struct EdgeLine {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub width: f64,
}

/// Tuning for cluster placement and labeling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
	pub cluster_radius: f64,
	pub cluster_strength: f32,
	pub label_count: usize,
}

impl Default for LayoutOptions {
	fn default() -> Self {
		Self::from(&DashboardConfig::default())
	}
}

impl From<&DashboardConfig> for LayoutOptions {
	fn from(config: &DashboardConfig) -> Self {
		Self {
			cluster_radius: config.cluster_radius,
			cluster_strength: config.cluster_strength,
			label_count: config.label_count,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub edges: Vec<EdgeLine>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub selected: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	centers: HashMap<u32, (f64, f64)>,
	cluster_strength: f32,
}

impl ForceGraphState {
	pub fn new(data: &PreparedGraph, options: LayoutOptions, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let centers = cluster_centers(&data.component_ids(), options.cluster_radius);
		let max_importance = max_of(data.nodes.iter().map(|n| n.importance));

		let mut ranked: Vec<usize> = (0..data.nodes.len()).collect();
		ranked.sort_by(|&a, &b| data.nodes[b].importance.total_cmp(&data.nodes[a].importance));
		let labeled: HashSet<usize> = ranked.into_iter().take(options.label_count).collect();
		let connectors: HashSet<&str> = data
			.edges
			.iter()
			.filter(|e| e.synthetic)
			.flat_map(|e| [e.source.as_str(), e.target.as_str()])
			.collect();

		let mut id_to_idx = HashMap::new();
		for (i, node) in data.nodes.iter().enumerate() {
			let component = node.component.unwrap_or_default();
			let (cx, cy) = centers.get(&component).copied().unwrap_or((0.0, 0.0));
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (
				(cx + SEED_RADIUS * angle.cos()) as f32,
				(cy + SEED_RADIUS * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color: component_color(component).into(),
					radius: node_radius(node.importance, max_importance),
					component,
					show_label: labeled.contains(&i),
					connector: connectors.contains(node.id.as_str()),
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		let max_weight = max_of(data.semantic_edges().map(|e| e.weight));
		let mut edges = Vec::new();
		for edge in &data.edges {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(edge.source.as_str()), id_to_idx.get(edge.target.as_str()))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				if !edge.synthetic {
					edges.push(EdgeLine {
						source: src,
						target: tgt,
						width: edge_width(edge.weight, max_weight),
					});
				}
			}
		}

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			selected: None,
			width,
			height,
			animation_running: true,
			centers,
			cluster_strength: options.cluster_strength,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// Hit area is in world space and scales with zoom like the node
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius + HIT_PADDING {
				found = Some(node.index());
			}
		});
		found
	}

	/// Current position of every node, for drawing edges.
	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.data.user_data.id == id {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn select(&mut self, id: Option<&str>) {
		self.selected = id.and_then(|id| self.index_of(id));
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the previous highlight around while it fades out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for edge in &self.edges {
				if edge.source == idx {
					self.hover.neighbors.insert(edge.target);
				} else if edge.target == idx {
					self.hover.neighbors.insert(edge.source);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.pull_toward_clusters(dt);

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	/// Move every free node a step toward its cluster center. Pinned nodes stay put.
	fn pull_toward_clusters(&mut self, dt: f32) {
		let base = self.cluster_strength * dt;
		let centers = &self.centers;
		self.graph.visit_nodes_mut(|node| {
			if node.data.is_anchor {
				return;
			}
			let info = &node.data.user_data;
			let pull = (if info.connector { base * CONNECTOR_PULL } else { base }).clamp(0.0, 1.0);
			if let Some(&(cx, cy)) = centers.get(&info.component) {
				node.data.x += (cx as f32 - node.data.x) * pull;
				node.data.y += (cy as f32 - node.data.y) * pull;
			}
		});
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::layout::prepare_graph;
	use crate::components::force_graph::types::{GraphPayload, RawEdge, RawNode};

	fn sample() -> PreparedGraph {
		let node = |id: &str, importance: f64| RawNode {
			id: Some(id.into()),
			importance: Some(importance),
			..Default::default()
		};
		let edge = |s: &str, t: &str| RawEdge {
			source: s.into(),
			target: t.into(),
			weight: Some(2.0),
		};
		prepare_graph(&GraphPayload {
			nodes: vec![
				node("microgravity", 9.0),
				node("bone", 4.0),
				node("radiation", 1.0),
				node("dna", 0.5),
			],
			edges: vec![edge("microgravity", "bone"), edge("radiation", "dna")],
			stats: None,
		})
		.unwrap()
	}

	fn options() -> LayoutOptions {
		LayoutOptions {
			cluster_radius: 200.0,
			cluster_strength: 0.5,
			label_count: 2,
		}
	}

	fn distance_to_center(state: &ForceGraphState, id: &str) -> f64 {
		let idx = state.index_of(id).unwrap();
		let (x, y) = state.positions()[&idx];
		let mut component = 0;
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				component = node.data.user_data.component;
			}
		});
		let (cx, cy) = state.centers[&component];
		((x - cx).powi(2) + (y - cy).powi(2)).sqrt()
	}

	#[test]
	fn synthetic_connectors_are_not_drawn() {
		let state = ForceGraphState::new(&sample(), options(), 800.0, 600.0);
		assert_eq!(state.edges.len(), 2);
	}

	#[test]
	fn hover_neighbors_ignore_connectors() {
		let mut state = ForceGraphState::new(&sample(), options(), 800.0, 600.0);
		let microgravity = state.index_of("microgravity").unwrap();
		let bone = state.index_of("bone").unwrap();
		let radiation = state.index_of("radiation").unwrap();

		state.set_hover(Some(microgravity));
		assert!(state.hover.neighbors.contains(&bone));
		assert!(!state.hover.neighbors.contains(&radiation));
		assert!(state.is_highlighted(bone));
		assert!(!state.is_highlighted(radiation));
	}

	#[test]
	fn only_top_nodes_are_labeled() {
		let state = ForceGraphState::new(&sample(), options(), 800.0, 600.0);
		let mut labeled = Vec::new();
		state.graph.visit_nodes(|node| {
			if node.data.user_data.show_label {
				labeled.push(node.data.user_data.id.clone());
			}
		});
		labeled.sort();
		assert_eq!(labeled, vec!["bone".to_string(), "microgravity".to_string()]);
	}

	#[test]
	fn selection_round_trips_through_ids() {
		let mut state = ForceGraphState::new(&sample(), options(), 800.0, 600.0);
		state.select(Some("dna"));
		let idx = state.selected.unwrap();
		assert_eq!(state.node_id(idx).as_deref(), Some("dna"));

		state.select(Some("unknown"));
		assert!(state.selected.is_none());
	}

	#[test]
	fn free_nodes_drift_toward_their_cluster() {
		let mut state = ForceGraphState::new(&sample(), options(), 800.0, 600.0);
		let dna = state.index_of("dna").unwrap();
		state.graph.visit_nodes_mut(|node| {
			if node.index() == dna {
				node.data.x = 1000.0;
				node.data.y = -1000.0;
			}
		});
		let before = distance_to_center(&state, "dna");
		state.pull_toward_clusters(0.5);
		let after = distance_to_center(&state, "dna");
		assert!(after < before);
	}

	#[test]
	fn pinned_nodes_ignore_cluster_pull() {
		let mut state = ForceGraphState::new(&sample(), options(), 800.0, 600.0);
		let bone = state.index_of("bone").unwrap();
		state.graph.visit_nodes_mut(|node| {
			if node.index() == bone {
				node.data.x = 500.0;
				node.data.y = 500.0;
				node.data.is_anchor = true;
			}
		});
		state.pull_toward_clusters(1.0);
		assert_eq!(state.positions()[&bone], (500.0, 500.0));
	}

	#[test]
	fn connector_endpoints_are_held_closer_to_their_cluster() {
		let mut state = ForceGraphState::new(&sample(), options(), 800.0, 600.0);
		// radiation represents its cluster in the connector chain, dna does not
		let (radiation, dna) = (state.index_of("radiation").unwrap(), state.index_of("dna").unwrap());
		let (cx, cy) = state.centers[&2];
		state.graph.visit_nodes_mut(|node| {
			if node.index() == radiation || node.index() == dna {
				node.data.x = cx as f32 + 300.0;
				node.data.y = cy as f32;
			}
		});

		state.pull_toward_clusters(0.2);
		let held = distance_to_center(&state, "radiation");
		let free = distance_to_center(&state, "dna");
		assert!(held < free, "{} should be below {}", held, free);

		let mut flagged = Vec::new();
		state.graph.visit_nodes(|node| {
			if node.data.user_data.connector {
				flagged.push(node.data.user_data.id.clone());
			}
		});
		flagged.sort();
		assert_eq!(flagged, vec!["microgravity".to_string(), "radiation".to_string()]);
	}
}
