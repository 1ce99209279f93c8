//! Integration tests for page-simplifier
//!
//! These tests run the complete pipeline end-to-end over realistic pages
//! and unusual inputs.

mod edge_cases;
mod real_world_pages;
