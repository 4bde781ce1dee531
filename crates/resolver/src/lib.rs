mod location;
mod resolver;
mod render;

pub use location::CurrentLocation;
pub use resolver::resolve;
pub use render::{render_option, render_switcher};
