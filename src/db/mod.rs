pub mod bootstrap;
pub mod dao;
pub mod entities;
pub mod providers;
pub mod retry;

pub use bootstrap::{Bootstrapper, ConnectError, StartupError};
