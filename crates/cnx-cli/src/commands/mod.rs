//! CLI subcommands.

pub mod extract;
pub mod text;
