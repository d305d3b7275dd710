//! smogwatch - air-quality watcher
//!
//! Sensor widgets draw their readings as vector glyph artwork rather than
//! text. The `vision` layer reads those glyph paths back into numbers; the
//! `analysis` layer grades PM2.5 levels and decides when to alert.

pub mod analysis;
pub mod config;
pub mod error;
pub mod storage;
pub mod vision;
