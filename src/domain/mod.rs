//! Domain layer - Core business logic
//!
//! Entities of an analysis session, the ports the domain relies on, and the
//! services that validate files, simulate progress and build reports.

pub mod entities;
pub mod repositories;
pub mod services;
