pub mod app_state;
pub mod content_node;
pub mod plan;

pub use app_state::AppState;
pub use content_node::ContentNode;
pub use plan::Plan;
