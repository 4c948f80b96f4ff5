mod home;
pub use home::Home;

mod auth;
pub use auth::{ForgotPassword, Login, Register};

mod dashboard;
pub use dashboard::{Connections, CreateContent, Credits, Dashboard};

mod not_found;
pub use not_found::NotFound;
