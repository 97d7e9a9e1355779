//! The read-eval loop behind the `>` prompt.

use crate::catalog::CatalogApi;
use crate::commands::{CategoriesCommand, Command, Console, ParseCommand, HELP};
use crate::export::Exporter;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// One interactive session over a console.
pub struct Session<'a, C: CatalogApi + ?Sized, R, W> {
    catalog: &'a C,
    exporter: Exporter,
    console: Console<R, W>,
}

impl<'a, C, R, W> Session<'a, C, R, W>
where
    C: CatalogApi + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(catalog: &'a C, exporter: Exporter, console: Console<R, W>) -> Self {
        Self { catalog, exporter, console }
    }

    /// Runs until `exit` or end of input.
    pub async fn run(&mut self) -> io::Result<()> {
        self.console.say("Type 'help' for commands.")?;

        while let Some(line) = self.console.ask("> ")? {
            let command = Command::parse(&line);
            debug!("Command: {:?}", command);

            match command {
                Command::Empty => {}
                Command::Categories => {
                    CategoriesCommand::new(self.catalog).execute(&mut self.console).await?;
                }
                Command::Parse => {
                    ParseCommand::new(self.catalog, &self.exporter)
                        .execute(&mut self.console)
                        .await?;
                }
                Command::Help => {
                    for line in HELP {
                        self.console.say(line)?;
                    }
                }
                Command::Exit => break,
                Command::Unknown(word) => {
                    self.console
                        .say(format!("Unknown command: '{}'. Type 'help' for commands.", word))?;
                }
            }
        }

        Ok(())
    }

    /// Consumes the session, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
