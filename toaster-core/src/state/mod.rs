//! Phase state machine for a toast cycle
//!
//! Defines the authoritative runtime behavior of the toaster.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Phase;
