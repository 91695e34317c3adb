// SPDX-License-Identifier: MPL-2.0
//! Application layer - carousel state and collaborator ports.
//!
//! - [`port`]: Traits the infrastructure adapters implement
//! - [`navigation`]: The ordered image sequence and its current index
//!
//! The application layer depends on [`crate::domain`] only. Adapters in
//! [`crate::infrastructure`] implement the ports; the UI engines consume
//! [`navigation::NavigationState`] through the orchestrator.

pub mod navigation;
pub mod port;

pub use navigation::NavigationState;
