use crate::core::registry::OperationRegistry;
use crate::domain::model::{Action, Book, Command};
use crate::utils::error::Result;
use std::io::{self, Write};

/// Runs commands against a book, writing display/print output to `out`.
pub struct Dispatcher<W: Write> {
    registry: OperationRegistry,
    out: W,
}

impl Dispatcher<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Dispatcher<W> {
    pub fn new(out: W) -> Self {
        Self::with_registry(OperationRegistry::with_defaults(), out)
    }

    pub fn with_registry(registry: OperationRegistry, out: W) -> Self {
        Self { registry, out }
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Processes `commands` in order and returns the output of the first
    /// serialize command, if any.
    ///
    /// Processing stops at that serialize command; later commands are never
    /// looked up. Commands whose action is not `display`, `print` or
    /// `serialize` are skipped. A recognized action with an unregistered
    /// variant fails with [`DispatchError::UnknownOperation`], leaving the
    /// output of earlier commands in place.
    ///
    /// [`DispatchError::UnknownOperation`]: crate::DispatchError::UnknownOperation
    pub fn dispatch(&mut self, book: &Book, commands: &[Command]) -> Result<Option<String>> {
        tracing::debug!(
            "Dispatching {} command(s) for '{}'",
            commands.len(),
            book.title
        );

        for (index, command) in commands.iter().enumerate() {
            match Action::parse(&command.action) {
                Some(Action::Display) => {
                    let op = self.registry.display(&command.variant)?;
                    op.display_type(book, &mut self.out)?;
                }
                Some(Action::Print) => {
                    let op = self.registry.print(&command.variant)?;
                    op.print_type(book, &mut self.out)?;
                }
                Some(Action::Serialize) => {
                    let op = self.registry.serializer(&command.variant)?;
                    let output = op.serializer_type(book)?;
                    self.out.flush()?;

                    let remaining = commands.len() - index - 1;
                    if remaining > 0 {
                        tracing::info!(
                            "Serialized with '{}'; {} remaining command(s) not run",
                            command,
                            remaining
                        );
                    }
                    return Ok(Some(output));
                }
                None => {
                    tracing::debug!("Skipping command '{}': unrecognized action", command);
                }
            }
        }

        self.out.flush()?;
        Ok(None)
    }
}
