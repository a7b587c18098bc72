//! Tests for the record source service

mod source_tests;
