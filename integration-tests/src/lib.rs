//! Shared objectives for the end-to-end tests.

pub mod test_functions;
