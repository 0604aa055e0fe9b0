// Routes behind the bearer token gate

pub mod filter;
pub mod update;
pub mod users;

pub use filter::filter_users_by_age;
pub use update::update_user;
pub use users::{get_user, list_users};
