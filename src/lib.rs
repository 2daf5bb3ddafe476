pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main proxy types for easier access
pub use models::{Network, VlessProxy};

// Re-export the conversion pipeline entry points
pub use generator::clash::{assemble, to_yaml, ClashConfig};
pub use parser::subparser::{decode_if_needed, parse_subscription};
