//! Integration tests for SheetCharter.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod spreadsheet_import_tests;
mod store_workflow_tests;
