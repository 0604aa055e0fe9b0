// Routes that do not require a bearer token

pub mod health;
pub mod login;
pub mod register;
pub mod root;

pub use health::health;
pub use login::login;
pub use register::register;
pub use root::root;

use serde::{Deserialize, Serialize};

/// `{token}` body returned by registration and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
