//! Structured, human-friendly error messages built from parameters and
//! templates.
//!
//! An [`Error`] accumulates a map of diagnostic parameters and four message
//! slots: a single `brief` headline plus ordered `info`, `blame`, and
//! `hints` lists. Rendering substitutes `{name}` placeholders from the
//! parameters and assembles the slots into one bulleted multi-line message:
//!
//! ```text
//! insufficient inventory to process request
//! • 1 Red Leicester requested
//! ✖ 0 available
//! ```
//!
//! Templates are either literal strings or closures computing their text
//! from the parameters; both kinds resolve through [`Template::resolve`].
//! Scoped context frames pushed with [`add_info`] flow into every error
//! constructed inside the scope.

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod message_list;
pub mod params;
pub mod render;
pub mod template;

pub use context::{add_info, InfoGuard};
pub use error::{Error, DEFAULT_BRIEF};
pub use message_list::MessageList;
pub use params::Params;
pub use render::TextRenderer;
pub use template::{ComputeFn, Template, TemplateError};
