pub mod application;
pub mod presentation;
