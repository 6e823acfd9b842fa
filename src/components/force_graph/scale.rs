//! Visual scales: node radius, edge width and cluster colors.

pub const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const MIN_RADIUS: f64 = 4.0;
pub const MAX_RADIUS: f64 = 16.0;
pub const MIN_EDGE_WIDTH: f64 = 0.6;
pub const MAX_EDGE_WIDTH: f64 = 4.0;

/// Radius for a node, area-proportional to its share of the largest importance.
pub fn node_radius(importance: f64, max_importance: f64) -> f64 {
	if max_importance <= 0.0 || !importance.is_finite() {
		return MIN_RADIUS;
	}
	let share = (importance / max_importance).clamp(0.0, 1.0);
	MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * share.sqrt()
}

pub fn edge_width(weight: f64, max_weight: f64) -> f64 {
	if max_weight <= 0.0 || !weight.is_finite() {
		return MIN_EDGE_WIDTH;
	}
	let share = (weight / max_weight).clamp(0.0, 1.0);
	MIN_EDGE_WIDTH + (MAX_EDGE_WIDTH - MIN_EDGE_WIDTH) * share
}

/// Palette color for a cluster. Components count from 1.
pub fn component_color(component: u32) -> &'static str {
	COLORS[(component.saturating_sub(1) as usize) % COLORS.len()]
}

/// Largest value in an iterator, or 0 when empty.
pub fn max_of(values: impl IntoIterator<Item = f64>) -> f64 {
	values.into_iter().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn radius_spans_range() {
		assert_eq!(node_radius(0.0, 10.0), MIN_RADIUS);
		assert_eq!(node_radius(10.0, 10.0), MAX_RADIUS);
		assert_eq!(node_radius(2.5, 10.0), MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * 0.5);
		assert_eq!(node_radius(50.0, 10.0), MAX_RADIUS);
	}

	#[test]
	fn degenerate_maxima_fall_back_to_minimum() {
		assert_eq!(node_radius(3.0, 0.0), MIN_RADIUS);
		assert_eq!(node_radius(f64::NAN, 1.0), MIN_RADIUS);
		assert_eq!(edge_width(1.0, 0.0), MIN_EDGE_WIDTH);
	}

	#[test]
	fn heavier_edges_are_wider() {
		assert!(edge_width(5.0, 10.0) > edge_width(2.0, 10.0));
		assert_eq!(edge_width(10.0, 10.0), MAX_EDGE_WIDTH);
	}

	#[test]
	fn colors_cycle_per_component() {
		assert_eq!(component_color(1), COLORS[0]);
		assert_eq!(component_color(0), COLORS[0]);
		assert_eq!(component_color(11), COLORS[0]);
		assert_eq!(component_color(3), COLORS[2]);
	}

	#[test]
	fn max_of_empty_is_zero() {
		assert_eq!(max_of(Vec::new()), 0.0);
		assert_eq!(max_of([1.0, 4.5, 2.0]), 4.5);
	}
}
