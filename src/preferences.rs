mod error;
mod store;

pub use error::{PreferenceError, Result};
pub use store::{CONFIG_FILE_NAME, PreferenceStore, Preferences};
