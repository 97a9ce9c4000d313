//! Tests for the template engine

use super::*;

// Test helper functions
mod helpers;


mod substitution;
