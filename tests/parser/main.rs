//! Integration tests for Layer 1: Parser
//!
//! Tests for command resolution and failure diagnostics over a real world.

mod failures;
