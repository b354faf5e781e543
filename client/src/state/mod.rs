//! Page state and its transitions.

pub mod page;
