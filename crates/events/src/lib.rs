mod models;
mod bus;

pub use models::*;
