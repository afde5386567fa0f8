//! Integration tests for the infinite parameter system
//!
//! These tests verify that the parameter system behaves correctly in various scenarios.

// Tests for the declaration builder
mod builder_tests;


// Tests for the bound accessor layer
mod bounds_tests;


// Tests for support-point handling
mod supports_tests;
