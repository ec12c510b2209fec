//! Patterns sub-module: visitor, accumulator.

pub mod accumulator;
pub mod visitor;
