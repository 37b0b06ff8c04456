//! Routed Pages

mod auth_layout;
mod board;
mod login;
mod signup;

pub use auth_layout::AuthLayout;
pub use board::TaskBoardPage;
pub use login::LoginPage;
pub use signup::SignupPage;
