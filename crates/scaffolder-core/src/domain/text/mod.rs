//! Idempotent structured-text mutation engine.
//!
//! Build manifests and property files are treated as opaque text. Entries are
//! recognised by literal substrings and inserted into a marked region (or a
//! structural fallback) with indentation taken from their future siblings.
//!
//! ```text
//!   locate (region) ──► render (fragment) ──► mutate (splice + outcome)
//! ```

pub mod coordinates;
pub mod fragment;
pub mod mutator;
pub mod region;

pub use coordinates::{PomCoordinates, read_tag_value};
pub use fragment::{Fragment, properties_marker};
pub use mutator::{EntityKey, InsertionOutcome, Mutation, ensure_container, mutate};
pub use region::{MarkerPair, Region, RegionResult, RegionSpec, StructuralAnchor, locate};
