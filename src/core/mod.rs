//! Core content layer
//!
//! This module contains the content tables, the derived citation index,
//! consistency checks and the rendering trait shared by all output formats.

pub mod content;
pub mod data;
pub mod traits;
pub mod validate;
