//! sift: resume ranking against a job description.
//!
//! sift takes one job description and a set of resume files, runs the
//! relevance ranking pipeline from `sift-engine`, and presents the ordered
//! report as a terminal table or JSON. Text extraction from resume files
//! and all presentation concerns live here, at the boundary; the engine
//! itself never touches the file system.

#![warn(missing_docs)]

pub mod cli;
