//! # domolite-domain
//!
//! Pure domain model for the domolite smart-home walkthrough.
//!
//! ## Responsibilities
//! - Define **Devices** (a shared name/energy core with a tagged
//!   light/thermostat payload) and their actions (`turn_on`, `turn_off`,
//!   variant setters)
//! - Define the **Registry** (ordered device container with a restartable
//!   forward-only cursor and stable sorted views)
//! - Define **Ordering** (the by-name and by-energy comparators)
//! - Define **Describe** (the dispatch table reporting a variant's default
//!   field values as text)
//! - Contain the error conventions for all of the above
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, the binary, or IO crates.

pub mod describe;
pub mod device;
pub mod error;
pub mod ordering;
pub mod registry;
