//! Request handling shared by the function binaries.
//!
//! Each handler performs at most one datastore call and answers with a 200
//! envelope; every other outcome is returned as a [`HandlerError`].
//!
//! [`HandlerError`]: crate::error::HandlerError

pub mod create;
pub mod hello;
pub mod read;
