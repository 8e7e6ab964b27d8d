//! Typed projections of the generic property dictionary
//!
//! A projection narrows the [`PropertyDictionary`](crate::props::PropertyDictionary)
//! of one event onto a schema specific to one interface kind. Each projection
//! is driven by a declarative name table of [`FieldMapping`] entries whose wire
//! names come from [`props::keys`](crate::props::keys).
//!
//! ## Available Projections
//!
//! - [`node`]: properties of audio nodes
//!
//! ## Usage
//!
//! ```rust
//! use pw_monitor::projection::{project_node_properties, NodeProps};
//! ```

pub mod node;

pub use node::{project_node_properties, NodeProps};

use crate::common::{DeviceClass, MediaClass};
use crate::error::ProjectionError;

/// One entry of a projection name table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    /// Field of the projected struct
    pub field: &'static str,
    /// Field of the property dictionary it is read from
    pub source: &'static str,
    /// Wire name of the property
    pub wire_name: &'static str,
}

/// Conversion of a dictionary value into a projected field type
pub(crate) trait Narrow<Source>: Sized {
    fn narrow(value: &Source, property: &'static str) -> Result<Self, ProjectionError>;
}

impl Narrow<String> for String {
    fn narrow(value: &String, _property: &'static str) -> Result<Self, ProjectionError> {
        Ok(value.clone())
    }
}

impl Narrow<i64> for i64 {
    fn narrow(value: &i64, _property: &'static str) -> Result<Self, ProjectionError> {
        Ok(*value)
    }
}

impl Narrow<String> for Option<MediaClass> {
    fn narrow(value: &String, _property: &'static str) -> Result<Self, ProjectionError> {
        Ok(Some(MediaClass::from_wire(value)))
    }
}

impl Narrow<String> for Option<DeviceClass> {
    fn narrow(value: &String, _property: &'static str) -> Result<Self, ProjectionError> {
        Ok(Some(DeviceClass::from_wire(value)))
    }
}
