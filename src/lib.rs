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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Per-frame procedural animators for molecular and particle-network scenes.
//!
//! The crate carries the animation logic of a molecular viewer and a canvas
//! background, free of any rendering library: animators rewrite
//! fixed-length attribute buffers once per frame and flag them dirty for
//! whatever renderer consumes them.
//!
//! # Key entry points
//!
//! - [`molecule::MoleculeScene`] - height-keyed colour wave plus spin over a
//!   loaded structure
//! - [`network::NetworkScene`] - bouncing particles joined by fading lines
//! - [`animation::FrameLoop`] - drives animators from an injected
//!   [`animation::FrameScheduler`]
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Nothing schedules itself. The host owns the scenes and a scheduler bound
//! to its display refresh; each frame the [`animation::FrameLoop`] advances
//! its [`animation::Clock`] and calls [`animation::FrameAnimator::tick`]
//! synchronously. Ticks never fail: missing attributes and empty scenes are
//! logged no-ops so one bad frame cannot stop the loop.

pub mod animation;
pub mod camera;
pub mod error;
pub mod molecule;
pub mod network;
pub mod options;
pub mod util;

pub use error::VizError;
