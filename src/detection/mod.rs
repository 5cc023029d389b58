//! Host platform and runtime detection.

pub mod java;
pub mod platform;

pub use java::{JavaProperties, JAVA_PROPERTIES_COMMAND};
pub use platform::HostOs;
