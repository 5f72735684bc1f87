//! Layout and drawing.
//!
//! `core` holds the geometry, the element contract and the drawing context;
//! `layout` the composite elements; `backend` turns recorded paint commands
//! into output.

pub mod core;

pub mod backend;

pub mod layout;

pub mod widgets;
