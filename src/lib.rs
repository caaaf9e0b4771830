//! unity-constants - C# constants from Unity project settings
//!
//! Reads input axes, tags, sorting layers and layers from a Unity project's
//! `ProjectSettings` and writes one C# class per setting with a string
//! constant for every name, so scripts can use `Tags.Player` instead of
//! `"Player"`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reports, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Identifier sanitizing, C# emission and the generation run
//! - `host`: Unity settings readers and editor refresh hooks

pub mod cli;
pub mod config;
pub mod core;
pub mod host;
