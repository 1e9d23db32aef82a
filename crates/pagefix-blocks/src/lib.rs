//! Canonical block rendering and injection for pagefix.
//!
//! This crate owns the one piece of pagefix that needs structural care: putting
//! a canonical content block into an HTML document exactly once.
//!
//! # Pipeline
//!
//! ```text
//! CanonicalBlock --render--> RenderedBlock --Injector::apply(text)--> Injection
//! ```
//!
//! [`Locator::classify`] decides where the block goes, in fixed priority order:
//!
//! 1. **Marker guard**: a `div` carrying `data-block="solution-pitch"` means the
//!    document already holds the block. Current versions are left alone; stale
//!    versions are refreshed in place unless [`StalePolicy::Keep`] is set.
//! 2. **Type A**: a `div` whose classes contain the pitch fingerprint is an
//!    older hand-written pitch section. Its true end is found with a depth scan
//!    over `div` tags ([`scanner`]) and the span is replaced.
//! 3. **Type B**: the FAQ section anchor. The block is inserted before it, after
//!    making sure the stylesheet runtime it needs is loaded in `<head>`.
//! 4. Otherwise the document is left untouched.

pub mod canonical;
pub mod error;
pub mod injector;
pub mod locator;
pub mod render;
pub mod scanner;

pub use canonical::{BlockContent, CanonicalBlock, Feature};
pub use error::{Error, Result};
pub use injector::{Dependency, Injection, Injector, Outcome, StalePolicy};
pub use locator::{Anchor, BlockMarker, Fingerprint, Locator, Placement};
pub use render::{RenderedBlock, render};
pub use scanner::{TagEvent, TagKind, TagScanner, attribute, find_element_end};
