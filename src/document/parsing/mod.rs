//! Document parsing utilities
//!
//! This module contains the HTML traversal helpers and the specialised
//! extraction steps for student names and questions.

pub(crate) mod dom;
pub(crate) mod heading;
pub(crate) mod question;
