//! Docsum runtime: turn PDFs, web pages and raw text into annotated summaries.
//!
//! The request path is strictly linear:
//!
//! 1. [`extraction`] normalizes an [`extraction::InputSource`] into plain text.
//! 2. [`summarizer`] condenses the text through an external generative model.
//! 3. [`keywords`] selects salient terms and emphasizes them in the summary.
//!
//! [`pipeline::Pipeline`] sequences these stages; [`server`] and [`cli`]
//! expose it over HTTP and on the command line. [`render`] covers the reverse
//! path (text to a downloadable `.txt` or `.pdf`).

pub mod acquisition;
pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod keywords;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod summarizer;
