mod models;
mod builder;
mod loader;
mod global;
mod errors;

pub use models::{PathTable, DirectoryLoader, DirectoryFormat};
pub use errors::TableError;
