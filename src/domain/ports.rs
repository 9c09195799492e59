use crate::domain::model::{Book, Command};
use crate::utils::error::Result;
use std::io::Write;

pub trait Displayable: Send + Sync {
    fn display_type(&self, book: &Book, out: &mut dyn Write) -> Result<()>;
}

pub trait Printable: Send + Sync {
    fn print_type(&self, book: &Book, out: &mut dyn Write) -> Result<()>;
}

pub trait Serializable: Send + Sync {
    fn serializer_type(&self, book: &Book) -> Result<String>;
}

pub trait ConfigProvider {
    fn book(&self) -> Book;
    fn commands(&self) -> &[Command];
}
