//! # attrkit-core — Attribute Type System Primitives
//!
//! The host-side half of a declarative schema framework's type system.
//! Resource schemas declare attribute types; the framework validates and
//! decodes untyped wire values through those types into strongly-typed
//! values. This crate defines the pieces every attribute type plugs into.
//!
//! ## Key Design Principles
//!
//! 1. **Diagnostics are accumulated, not thrown.** Validation returns a
//!    [`Diagnostics`] collection of path-scoped, categorized entries. The
//!    caller merges them across the whole configuration tree. Only
//!    conversions that cannot produce a value at all return an
//!    [`AttrError`].
//!
//! 2. **Type descriptors are stateless.** [`AttrType`] implementations are
//!    compared by kind and parameters via [`AttrType::equal`], never by
//!    identity.
//!
//! 3. **Checked narrowing.** Decoded values are `Box<dyn AttrValue>`.
//!    Narrowing to a concrete kind is a checked `downcast_ref`, and a
//!    mismatch is an explicit error branch.
//!
//! 4. **Null and unknown are states, not errors.** Every value can be
//!    known, null, or not yet known.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `attrkit-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod attr;
pub mod diag;
pub mod error;
pub mod path;
pub mod string;
pub mod wire;

pub use attr::{AttrType, AttrValue, StringTypable, StringValuable};
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use error::{AttrError, WireError};
pub use path::{AttrPath, PathStep};
pub use string::{StringType, StringValue, ValueState};
pub use wire::{WireData, WireState, WireType, WireValue};
