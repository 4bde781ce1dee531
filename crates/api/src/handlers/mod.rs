mod models;
mod state;
mod switcher;
mod paths;

pub use models::AppState;
pub use switcher::{get_switcher, get_switcher_html};
pub use paths::list_paths;
pub use state::not_found;
