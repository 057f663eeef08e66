pub mod boundary;
pub mod context;
pub mod dispatcher;

pub use boundary::{report, run};
pub use dispatcher::Dispatcher;
