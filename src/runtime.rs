mod context;
mod error;
mod submit;


pub use context::AppContext;
pub use error::{AppError, Result};
pub use submit::{Outcome, submit, submit_with_source};
