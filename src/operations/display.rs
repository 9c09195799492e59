use crate::domain::model::Book;
use crate::domain::ports::Displayable;
use crate::operations::reversed;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayConsole;

impl Displayable for DisplayConsole {
    fn display_type(&self, book: &Book, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", book.content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayReverse;

impl Displayable for DisplayReverse {
    fn display_type(&self, book: &Book, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", reversed(&book.content))?;
        Ok(())
    }
}
