//! Adapted views over the raw RAML tree: lists re-keyed into ordered maps.

mod document;
mod resource;
mod response;

pub use document::{Document, ResourceMap};
pub use resource::Resource;
pub use response::Response;
