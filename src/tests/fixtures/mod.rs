pub mod commands;
pub mod shift;
pub mod state;
