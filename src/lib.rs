pub mod app;
pub mod cli;
pub mod console;
pub mod display;
pub mod edit;
pub mod error;
pub mod flow;
pub mod list;
pub mod model;
pub mod util;

pub use app::{run, run_session};
