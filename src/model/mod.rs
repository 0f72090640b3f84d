//! Domain models.
//!
//! Request-scoped, in-memory only: a profile document is parsed once at the
//! fetch boundary and discarded after the reply is delivered.

pub mod profile;
