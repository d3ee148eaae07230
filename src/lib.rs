// Library for tests to access modules

pub mod config;
pub mod formatter;
pub mod models;
pub mod presenter;
pub mod routes;
pub mod session;
pub mod source;
pub mod version;
