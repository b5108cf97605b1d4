//! Test doubles and fixtures shared by unit tests.

pub mod fixtures;
