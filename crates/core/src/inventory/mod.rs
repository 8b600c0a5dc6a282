//! Asset inventory: categories, employees, and the asset lifecycle.
//!
//! This module does NOT depend on the database crate. Persistence is
//! reached through the traits in [`store`]; callers inject an
//! implementation (PostgreSQL in production, [`memory::InMemoryStore`]
//! in tests).

pub mod category;
pub mod employee;
pub mod lifecycle;
pub mod memory;
pub mod model;
pub mod status;
pub mod store;
pub mod validation;

use std::sync::Arc;

pub use category::CategoryService;
pub use employee::EmployeeService;
pub use lifecycle::AssetService;
pub use status::AssignmentStatus;
use store::{AssetStore, CategoryStore, EmployeeStore};

/// The three services wired to one backing store.
#[derive(Clone)]
pub struct Inventory {
    pub assets: AssetService,
    pub categories: CategoryService,
    pub employees: EmployeeService,
}

impl Inventory {
    /// Build every service on top of a store that implements all three
    /// store traits.
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: AssetStore + CategoryStore + EmployeeStore + 'static,
    {
        Self {
            assets: AssetService::new(store.clone(), store.clone(), store.clone()),
            categories: CategoryService::new(store.clone()),
            employees: EmployeeService::new(store),
        }
    }
}
