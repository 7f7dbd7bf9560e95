//! Epscale computes end-point scaling (EPS) parameters for the relative
//! permeability and capillary pressure curves of a porous media flow simulator.
//!
//! Given saturation function tables for a rock (saturation) region and,
//! optionally, per-cell override arrays, the crate produces the saturation and
//! value end points ("scaling points") which a curve evaluator uses to rescale
//! normalized curves onto the physical saturation range of each cell.
//!
//! The computation flows strictly forward:
//!
//! 1. [SatFuncTables::family] selects the populated table keyword family;
//! 2. [EndpointInfo::extract_unscaled] extracts one unscaled end-point record
//!    per saturation region;
//! 3. [EpsGridProperties::extract_scaled] produces a cell-specific record by
//!    applying the optional per-cell overrides;
//! 4. [ScalingPoints::new] assembles the scaling points for the oil-water or
//!    gas-oil subsystem in two-point or three-point mode.
//!
//! All operations are synchronous, reentrant, and free of shared mutable
//! state; parallel structuring across cells is the caller's responsibility.

mod endpoints;
mod error;
mod family;
mod grid_props;
mod samples;
mod scaling_points;
mod tables;
pub use crate::endpoints::*;
pub use crate::error::*;
pub use crate::family::*;
pub use crate::grid_props::*;
pub use crate::samples::*;
pub use crate::scaling_points::*;
pub use crate::tables::*;
