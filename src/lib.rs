//! Scan a single web page for video and playlist links.
//!
//! [`extract::extract_urls`] holds the harvesting heuristic; the remaining
//! modules are the fetch, output and command-line plumbing used by the binary.

pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
