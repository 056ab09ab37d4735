//! # ramlmap
//!
//! **ramlmap** parses [RAML](https://raml.org) API descriptions and
//! re-indexes the parsed tree into ordered maps keyed by the identifiers
//! you actually look things up by: path, HTTP method, parameter name,
//! mime type and status code.
//!
//! The upstream parser hands back flat lists; this crate's adapters turn
//! them into first-seen-ordered maps (duplicate keys keep their first
//! position, the later value wins), group resources by path and method
//! with DELETE handlers sorted last, and expose a deferred accessor for a
//! method's example payload.
//!
//! ## Modules
//!
//! - **[`raml`]** - raw document tree: RAML text parsing and the node
//!   types the adapters consume
//! - **[`adapt`]** - adapted views: [`Document`], [`Resource`] and
//!   [`Response`] with their keyed maps
//! - **[`keyed`]** - the ordered-map builder the adapters share
//!
//! ## Example
//!
//! ```
//! let doc = ramlmap::parse_str(
//!     "#%RAML 0.8\ntitle: Pets\n/pets:\n  get:\n  delete:\n",
//! )?;
//! let methods: Vec<_> = doc.resources["/pets"].keys().collect();
//! assert_eq!(methods, vec![&http::Method::GET, &http::Method::DELETE]);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod adapt;
pub mod keyed;
mod load;
pub mod raml;

pub use adapt::{Document, Resource, ResourceMap, Response};
pub use load::{parse, parse_file, parse_str};
