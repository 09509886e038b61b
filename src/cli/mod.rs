// Command-line interface

pub mod commands;
pub mod handlers;
pub mod output;
