//! Lyrics fetch library - shared modules for the batch downloader.

pub mod input;
pub mod lookup;
pub mod models;
pub mod normalize;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod safety;
pub mod worker;
