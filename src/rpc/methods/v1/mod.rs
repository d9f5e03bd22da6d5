mod account;
mod admin;
mod application;
mod authentication;
mod groups;
mod users;

pub use account::Account;
pub use admin::Admin;
pub use application::Application;
pub use authentication::Authentication;
pub use groups::Groups;
pub use users::Users;
