#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod pipeline;
pub mod raster;
pub mod rendering;
pub use app::PrimMstApp;
pub use error::{Error, Result};
