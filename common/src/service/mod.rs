// Business rules for user and task operations
//
// Services validate payloads, check existence and slug uniqueness, then
// delegate the write to a store. Constraint violations raised by the store
// map to the same NotFound/Conflict outcomes as the pre-checks.

pub mod task;
pub mod user;

pub use task::TaskService;
pub use user::UserService;

pub const TASKS_NOT_FOUND: &str = "Tasks not found.";
pub const TASK_NOT_FOUND: &str = "Task was not found.";
pub const USERS_NOT_FOUND: &str = "Users not found.";
pub const USER_NOT_FOUND: &str = "User was not found.";

pub const CREATED: &str = "Successful.";
pub const TASK_UPDATED: &str = "Task update is successful.";
pub const TASK_DELETED: &str = "Task delete is successful.";
pub const USER_UPDATED: &str = "User update is successful.";
pub const USER_DELETED: &str = "User delete is successful.";

pub(crate) fn task_conflict(title: &str) -> String {
    format!("The task with title {} already exists.", title)
}

pub(crate) fn user_conflict(username: &str) -> String {
    format!("The user with username {} already exists.", username)
}
