//! Assessment engines for the planning platform.

pub mod readiness;
