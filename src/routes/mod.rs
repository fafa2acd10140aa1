//! snapquery API Routes
//!
//! - /api/:query - image search proxy
//! - /latest - recent logged queries
//! - /health - liveness

pub mod latest;
pub mod search;
pub mod swagger;
