pub mod carousel;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod io;
pub mod keyword;
pub mod paths;
pub mod schedule;
pub mod selection;
pub mod site;
pub mod style;
pub mod timeline;
pub mod types;

pub use error::{EatoError, IntegrityIssue, Result};
pub use site::Site;
