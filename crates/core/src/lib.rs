//! Domain types, errors and validation rules shared by the notekeeper crates.
//!
//! Nothing in here touches the database or HTTP; the `db` crate builds its
//! DTOs on top of [`validation`] and the `api` crate maps [`error::CoreError`]
//! to responses.

pub mod category;
pub mod color;
pub mod error;
pub mod note;
pub mod seed;
pub mod types;
pub mod validation;
