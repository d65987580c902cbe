//! Library components of the `csviewer` command-line tool.

pub mod dataset_spec;
pub mod logging;
pub mod render;
