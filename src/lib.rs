pub mod config;
pub mod core;
pub mod dispatch;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod prompter;
pub mod reconcile;
pub mod sites;
pub mod ui;
pub mod workflow;
