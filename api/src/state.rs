use metrics_exporter_prometheus::PrometheusHandle;

use common::db::DbPool;
use common::service::{TaskService, UserService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub users: UserService,
    pub tasks: TaskService,
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create a new AppState instance
    pub fn new(
        db_pool: DbPool,
        users: UserService,
        tasks: TaskService,
        metrics: PrometheusHandle,
    ) -> Self {
        Self {
            db_pool,
            users,
            tasks,
            metrics,
        }
    }
}
