//! Output stage: turn emitted buffers into files.
pub mod c;
