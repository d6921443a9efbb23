pub mod bootstrap;
pub mod error;
pub mod http;
pub mod state;
