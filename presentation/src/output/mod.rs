//! Output formatting and transcript export

pub mod console;
pub mod export;
