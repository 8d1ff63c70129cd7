#![forbid(unsafe_code)]

pub mod error;
pub mod i18n;
pub mod machine;
pub mod model;
pub mod time;

pub use error::Error;
pub use i18n::{Language, PREFERRED_LANGUAGE_KEY, fill, translate};
pub use time::Clock;
