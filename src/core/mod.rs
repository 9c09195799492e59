pub mod dispatcher;
pub mod registry;

pub use crate::domain::model::{Action, Book, Command};
pub use crate::domain::ports::{ConfigProvider, Displayable, Printable, Serializable};
pub use crate::utils::error::Result;
