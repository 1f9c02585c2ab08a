pub mod health;
pub mod session_auth;
pub mod users;
