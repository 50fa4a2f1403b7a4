mod dispatcher;
mod service;

pub use dispatcher::*;
pub use service::*;
