//! Force-directed knowledge graph canvas and the layout preparation feeding it.

mod component;
mod frame_loop;
pub mod layout;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use layout::prepare_graph;
pub use types::{Edge, GraphPayload, GraphStats, Node, PreparedGraph, RawEdge, RawNode};
