use crate::domain::model::Book;
use crate::domain::ports::Printable;
use crate::operations::reversed;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct PrintConsole;

impl Printable for PrintConsole {
    fn print_type(&self, book: &Book, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing the book: {}...", book.title)?;
        writeln!(out, "{}", book.content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrintReverse;

impl Printable for PrintReverse {
    fn print_type(&self, book: &Book, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing the book in reverse: {}...", book.title)?;
        writeln!(out, "{}", reversed(&book.content))?;
        Ok(())
    }
}
