//! Command handlers, one module per subcommand

pub mod check;
pub mod compare;
pub mod configure;
pub mod render;
pub mod serve;
pub mod sources;
