//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - helpers: Grid builders and file fixtures
//! - integration: Import to chart workflows across modules
//! - unit: Single-component unit tests

mod integration;
