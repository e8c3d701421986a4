//! Small helpers shared by the workspace's configuration loaders.

pub mod env;
