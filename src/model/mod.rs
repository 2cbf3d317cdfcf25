pub mod config;
pub mod task;
pub mod variant;

pub use config::*;
pub use task::*;
pub use variant::*;
