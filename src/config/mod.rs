//! Configuration module for note recognition

mod bands;

pub use bands::{BandTable, NoteBand, NoteName};
