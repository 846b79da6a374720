//! Detection report module

mod result;

pub use result::{NoteReport, PlotData};
