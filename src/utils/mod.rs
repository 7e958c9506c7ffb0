//! # Utility Modules
//!
//! Supporting utilities shared by binaries and tests.
//!
//! ## Components
//! - **Logging**: tracing subscriber setup

pub mod logging;
