//! Outbound services and pure transformations.

pub mod image_search;
pub mod projection;
