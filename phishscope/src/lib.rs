// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

pub mod commands;

// Re-export commonly used handler functions for convenience
pub use handlers::{load_classifier, load_urls_from_file, parse_url_line};

pub use commands::command_argument_builder;
