//! Page components

mod auth;
mod home;
mod profile;

pub use auth::AuthPage;
pub use home::HomePage;
pub use profile::ProfilePage;
