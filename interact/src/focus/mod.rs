// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Focus claims and the security policy that gates them.
//!
//! - **[`window_identity`]**: opaque window/process handles and the
//!   [`WindowIdentitySnapshot`] captured per claim.
//! - **[`focus_validator`]**: the pure [`validate_focus_claim`] policy.
//!
//! [`focus_validator`]: mod@focus_validator
//! [`window_identity`]: mod@window_identity

pub mod focus_validator;
pub mod window_identity;

pub use focus_validator::*;
pub use window_identity::*;
