//! Analyzers for project profiles.

/// Cloud cost estimation and optimization recommendations.
pub mod cost_optimize;
