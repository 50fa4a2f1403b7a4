mod error;
mod rules;
mod submission;
mod submit_form;

pub use error::*;
pub use rules::*;
pub use submission::*;
pub use submit_form::*;
