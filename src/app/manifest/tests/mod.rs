//! Integration tests for manifest decoding
//!
//! These tests exercise complete manifests, file loading, and the
//! decode-then-encode behavior of optional members.

pub mod integration;
