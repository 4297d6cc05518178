//! The plugin configuration subsystem.
//!
//! Modules are ordered leaf-first: `schema` and `defaults` define the data,
//! `fields`, `lenient` and `rules` describe how old documents map onto it, and
//! `migrate` / `validate` operate on a parsed document.

pub mod defaults;
pub mod error;
pub mod fields;
pub mod lenient;
pub mod migrate;
pub mod rules;
pub mod schema;
pub mod validate;
