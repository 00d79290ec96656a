//! HTTP handlers, one module per resource.
//!
//! Staff-facing modules sit at the top level; the CRUD administration
//! surface lives under [`admin`] and requires the admin role throughout.

pub mod account;
pub mod admin;
pub mod auth;
pub mod reports;
pub mod tasks;
pub mod vacations;
