mod admin;
pub use admin::Admin;

mod home;
pub use home::Home;
