//! Progress reporting while agents deliberate

pub mod reporter;
