// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math allowances
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Interactive camera manipulator for real-time 3D viewers.
//!
//! Camber translates pointer/touch input (drag, scroll) into a
//! continuously updated eye/target/up basis suitable for view-matrix
//! construction. Two interaction paradigms are supported: ORBIT
//! (turntable rotation and strafe around a point of interest) and MAP
//! (2D pan/zoom over a ground plane, as in mapping applications).
//!
//! # Key entry points
//!
//! - [`Builder`] - configures and creates a manipulator
//! - [`Manipulator`] - the interaction state machine; feed it
//!   `grab_begin`/`grab_update`/`grab_end` and `zoom` events, read
//!   [`Manipulator::look_at`] once per frame
//! - [`Bookmark`] - snapshot/restore of camera state, with TOML
//!   persistence for saved views
//!
//! # Scope
//!
//! The crate owns interaction and pose computation only. Window event
//! capture, view/projection consumption, and rendering belong to the
//! caller; see [`Pose::view_matrix`] for the hand-off point.

pub mod bookmark;
pub mod config;
pub mod error;
pub mod manipulator;
pub mod pose;
pub mod raycast;

pub use bookmark::Bookmark;
pub use config::{Builder, Config, Fov, Mode};
pub use error::CamberError;
pub use manipulator::Manipulator;
pub use pose::Pose;
