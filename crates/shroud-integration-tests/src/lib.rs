//! End-to-end tests for the Shroud engine
//!
//! These tests exercise the full mask/restore cycle the way a caller would:
//! one shared engine, per-call contexts, persistence of the context across a
//! simulated process boundary, and randomized adversarial input.
