//! Utilities sub-module: data formatting, digit reductions.

pub mod data_formatters;
pub mod digits;
