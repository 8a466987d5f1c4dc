mod alert;
mod event;
mod fetch_error;
mod lenient;
mod placeholder;
mod plant;
mod service;
mod session;

#[cfg(test)]
pub mod fakes;

pub use alert::*;
pub use event::*;
pub use fetch_error::*;
pub use placeholder::*;
pub use plant::*;
pub use service::*;
pub use session::*;
