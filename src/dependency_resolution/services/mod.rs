mod frontier_planner;
mod metadata_generator;
mod tree_renderer;

pub use frontier_planner::{FrontierPlanner, MAX_BATCH_SIZE};
pub use metadata_generator::MetadataGenerator;
pub use tree_renderer::TreeRenderer;
