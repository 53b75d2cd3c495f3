//! # lift_core - Hydraulic Elevator Sizing Engine
//!
//! `lift_core` is the computational heart of LiftSizer: cylinder
//! feasibility under pressure and buckling limits, hydraulic component
//! selection, tiered quote pricing, and a duty-cycle thermal estimate.
//! All inputs and outputs are JSON-serializable, so the same engine can
//! sit behind a CLI, a GUI, or a service endpoint.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Catalog-Driven**: Every selectable component lives in typed tables
//!
//! ## Quick Start
//!
//! ```rust
//! use lift_core::calculations::{evaluate_cylinders, select_components, compute_cost};
//! use lift_core::calculations::{LoadInputs, SuspensionRatio};
//! use lift_core::catalog::Catalog;
//!
//! let inputs = LoadInputs {
//!     capacity_kg: 1000.0,
//!     carcass_weight_kg: 800.0,
//!     travel_distance_mm: 3000.0,
//!     buffer_mm: 300.0,
//!     speed_mps: 0.5,
//!     suspension: SuspensionRatio::TwoToOne,
//!     cylinder_count: 2,
//!     regulation: "EN 81-20".to_string(),
//! };
//!
//! let catalog = Catalog::standard();
//! let evaluations = evaluate_cylinders(&inputs, &catalog).unwrap();
//! let chosen = evaluations.iter().find(|e| e.valid).unwrap();
//! let config = select_components(chosen, &inputs, &catalog).unwrap();
//! let cost = compute_cost(&config, &catalog);
//! assert!(cost.total_eur() > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Component catalogs (cylinders, pumps, motors, valves, ...)
//! - [`calculations`] - The four sizing engines
//! - [`project`] - Project container, numbering, and revision log
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod file_io;
pub mod project;

// Re-export commonly used types at crate root for convenience
pub use errors::{SizingError, SizingResult};
pub use file_io::{load_project, save_project, FileLock, ProjectStore};
pub use project::{Project, ProjectMetadata, ProjectStatus};
