pub mod command_handler;
pub mod handlers;
pub mod scenario_commands;
