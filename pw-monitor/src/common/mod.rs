//! Common utilities shared by the record models
//!
//! ## Available Utilities
//!
//! - [`json_decode`]: JSON parsing helpers and custom deserializers
//! - [`enums`]: enumerations reported by the daemon as strings
//!
//! ## Usage
//!
//! ```rust
//! use pw_monitor::common::{EventType, MediaClass, State};
//! ```

pub(crate) mod wire_enum;

pub mod enums;
pub mod json_decode;

// Re-export commonly used types for convenient access
pub use enums::{DeviceClass, EventType, MediaClass, State};
