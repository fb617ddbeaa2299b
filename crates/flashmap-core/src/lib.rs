//! Flashmap Core Types
//!
//! This crate provides the foundational types shared by the Flashmap parser
//! and view model:
//!
//! - **Identifiers**: String-interned node identifiers ([`identifier::NodeId`])
//! - **Forest**: The arena of parsed nodes and its traversals ([`forest`] module)
//! - **Builder**: Node/edge rules and root selection ([`builder`] module)

pub mod builder;
pub mod forest;
pub mod identifier;
