//! Route-level page components.

pub mod board;
