pub mod config;
pub mod controller;

pub use config::DemoConfig;
pub use controller::{run, DemoLoop, LoopState, RunReport};
