//! Concurrent recursive directory walker with a flat, ordered output.
//!
//! A walk lists each directory, fans out one task per entry, recurses
//! into subdirectories and runs a [`FileProcessor`] on everything else,
//! then joins the results into a [`ResultTree`] that preserves listing
//! order. [`flatten`] reduces that tree to the leaf values;
//! [`write_flat_list`] prints them as JSON. Any single failure fails
//! the whole walk.

pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;
pub mod process;

pub use crate::core::{
    DEFAULT_MAX_IN_FLIGHT, MAX_IN_FLIGHT_LIMIT, WalkOptions, Walker, flatten, write_flat_list,
};
pub use crate::error::WalkError;
pub use crate::fs::{FileSystem, RealFileSystem};
pub use crate::models::{EntryKind, ResultTree};
pub use crate::process::{FileProcessor, IdentityProcessor};
