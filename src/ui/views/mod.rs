pub mod check;
pub mod clean;
pub mod compress;
pub mod config;
pub mod hooks;
