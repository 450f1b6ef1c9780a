//! Test modules for the cause submission crate
//!
//! ## Test Categories
//!
//! - **Unit Tests**: Individual module functionality
//!   - `fields_test` - Form state holder
//!   - `files_test` - File selections and accept hints
//!   - `validation_test` - Pre-submit constraint checks
//!   - `payload_test` - Multipart payload construction
//!   - `submission_test` - Submission controller and results
//!   - `presentation_test` - Presentation model
//!   - `settings_test` - Settings file handling
//!   - `api_test` - HTTP client against a local stub server
//!
//! - **Integration Tests**: Cross-module functionality
//!   - `integration_test` - Whole-form submission scenarios
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! cargo test api_test -- --nocapture
//! ```

#[cfg(test)]
pub mod support;

#[cfg(test)]
pub mod fields_test;






#[cfg(test)]
pub mod settings_test;
