//! Cue sheet assembly and output.

mod sheet;
mod write;

pub use sheet::CueSheet;
pub use write::write;
#[cfg(test)]
pub use write::output_path;
