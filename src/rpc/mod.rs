pub mod dispatcher;
pub mod handler;
pub mod methods;
pub mod registry;
