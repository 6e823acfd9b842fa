//! Dashboard widgets.

mod entity_panel;
pub mod force_graph;
mod insights_panel;
mod stat_cards;
mod top_entities;

pub use entity_panel::EntityPanel;
pub use insights_panel::InsightsPanel;
pub use stat_cards::StatCards;
pub use top_entities::TopEntities;
