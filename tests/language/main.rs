//! Integration tests for Layer 1: Language
//!
//! Tests for the function table and the expression, call and function
//! compilers.

mod table;
