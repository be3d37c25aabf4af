pub mod base;
pub mod messages;

pub use base::Controller;
pub use messages::{DefaultMessages, Locale, UnknownLocale};
