//! Learning workflows: who sees lesson media, enrolling, and tracking progress.
//!
//! Handlers stay thin; the decisions that touch more than one repository live
//! here so they can be exercised directly from tests.

pub mod enrollment;
pub mod progress;
pub mod visibility;
