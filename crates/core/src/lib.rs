//! Core logic for Safal.
//!
//! This crate contains pure domain logic with ZERO web dependencies.
//! All domain types, projections, and lookups live here.
//!
//! # Modules
//!
//! - `roi` - ROI projection calculator and its bounded controls
//! - `listing` - Pre-leased property listings and their repository
//! - `blog` - Articles and their repository
//! - `session` - Explicit per-visitor session flags
//! - `view` - Page view models built from the above

pub mod blog;
pub mod listing;
pub mod roi;
pub mod session;
pub mod view;
