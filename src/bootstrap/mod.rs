pub mod config;
pub mod logging;
pub mod router;
pub mod table;
