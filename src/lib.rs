//! Build creativecommons.org primary site includes (navigation header,
//! navigation footer, scripts, and styles) from the WordPress REST API.
//!
//! The library is a thin pipeline: fetch JSON from four fixed REST
//! endpoints, substitute the payloads into Tera templates, and write the
//! rendered fragments as include files. Each endpoint is processed
//! independently so one failing feed never blocks the others.
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod report;

pub use config::{Config, Environment};
pub use error::{Error, Result};
pub use pipeline::Pipeline;
