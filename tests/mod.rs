//! Test suite for homelist
//!
//! This module organizes all tests

pub mod property;
