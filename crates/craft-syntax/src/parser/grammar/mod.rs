//! Grammar productions for the Craft language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Each production builds the node the rule of the same name describes in
//! [`crate::rules`].

mod arch;
mod common;
mod items;
mod scenarios;
mod services;
mod structures;
