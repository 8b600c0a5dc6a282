//! Row structs.
//!
//! Each submodule contains a `FromRow` struct matching the columns its
//! repository selects, plus the conversion into the core entity type.

pub mod asset;
pub mod category;
pub mod employee;
