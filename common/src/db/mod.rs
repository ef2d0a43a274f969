// Database layer module: pool, schema bootstrap, store traits and repositories

pub mod pool;
pub mod repositories;
pub mod schema;
pub mod store;

pub use pool::DbPool;
pub use store::{TaskStore, UserStore};

#[cfg(any(test, feature = "mocks"))]
pub use store::{MockTaskStore, MockUserStore};
