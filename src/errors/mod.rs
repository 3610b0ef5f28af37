//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics the parser accumulates. It includes:
//!
//! - Error structures carrying the line/column of the offending token
//! - Specific error variants for the structural and expression-grammar failures
//! - The `Ln <line>, Col <column>: <message>` rendering
//! - Helpful suggestions for the common mistakes

pub mod errors;
