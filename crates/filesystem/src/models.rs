/// Filesystem helpers shared by the config loader and the directory loader
pub struct FileSystem;
