//! Cache Infrastructure Tests
//!
//! Typed facade and factory, exercised over the in-memory backend.
