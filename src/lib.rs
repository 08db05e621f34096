// Savescript - save the last shell command as a reusable script
// Library exports

// Core modules
pub mod cli;
pub mod config;
pub mod errors;
pub mod history;
pub mod installer;
pub mod script;
