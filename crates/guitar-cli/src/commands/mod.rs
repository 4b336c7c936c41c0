pub mod config;
pub mod demo;
pub mod new;

pub use demo::run_demo;
pub use new::run_new;
