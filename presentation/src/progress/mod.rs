//! Progress reporting while a completion is pending

pub mod reporter;
