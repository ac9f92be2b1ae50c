//! gddoc: per-class markdown documentation for GDScript projects.
//!
//! Scripts are parsed one at a time into [`model::ClassDocument`]s, collected
//! in a [`registry::ClassRegistry`], placed in an output tree by
//! [`hierarchy`] according to their inheritance chain, and rendered by a
//! [`render::Renderer`].

pub mod cursor;
pub mod discover;
pub mod error;
pub mod hierarchy;
pub mod markup;
pub mod model;
pub mod parser;
pub mod registry;
pub mod render;
