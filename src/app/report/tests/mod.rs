//! Integration tests for the report pipeline
//!
//! These tests build small test corpora and report directories on disk and
//! run the complete pipeline over them.
