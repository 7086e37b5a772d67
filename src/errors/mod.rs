//! Error types for the analyser.
//!
//! This module defines the errors produced while analysing a program:
//!
//! - Error structure with source position information
//! - Lexical, syntactic and semantic error variants
//! - Classification of each variant into its analysis phase

pub mod errors;
