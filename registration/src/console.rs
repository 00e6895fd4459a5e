use std::io::{BufRead, Write};

use crate::Choice;
use crate::Message;
use crate::UserStore;

use anyhow::{Context, Result};

/// Menu dialog on top of a [`UserStore`].
///
/// Reads answers line by line from `input` and writes prompts and results to
/// `output`, so the same flow runs on a terminal or on in-memory buffers.
pub struct Console<'a, R, W> {
    store: &'a UserStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(store: &'a UserStore, input: R, output: W) -> Console<'a, R, W> {
        Console {
            store,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks for a menu entry and hands back the answer as typed.
    pub fn user_choice(&mut self) -> Result<String> {
        self.say(Message::MenuPrompt)?;
        self.read_line()?
            .context("input ended before a menu entry was chosen")
    }

    /// One pass through the menu.
    pub fn run_once(&mut self) -> Result<()> {
        let choice = self.user_choice()?;
        self.dispatch(&choice)
    }

    /// Keeps showing the menu until the input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.say(Message::MenuPrompt)?;
            let choice = match self.read_line()? {
                Some(choice) => choice,
                None => break,
            };
            self.dispatch(&choice)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<()> {
        match Choice::parse_line(choice) {
            Some(entry) => {
                log::debug!("Menu entry {} selected", entry);
                match entry {
                    Choice::Authenticate => self.authenticate(),
                    Choice::Register => self.register(),
                }
            }
            None => {
                log::debug!("Unrecognized menu entry {:?}", choice);
                self.say(Message::InvalidInput)
            }
        }
    }

    fn authenticate(&mut self) -> Result<()> {
        let username = self.ask(Message::UsernamePrompt)?;
        let password = self.ask(Message::PasswordPrompt)?;
        let reply = if self.store.authenticate_user(&username, &password)? {
            Message::AuthSuccess
        } else {
            Message::AuthFailure
        };
        self.say(reply)
    }

    // A taken username is reported only in the log; the listing follows either way.
    fn register(&mut self) -> Result<()> {
        let username = self.ask(Message::UsernamePrompt)?;
        let email = self.ask(Message::EmailPrompt)?;
        let password = self.ask(Message::PasswordPrompt)?;
        self.store.add_user(&username, &email, &password)?;
        self.store
            .display_users(&mut self.output)
            .context("Could not list registered users")?;
        Ok(())
    }

    fn ask(&mut self, prompt: Message) -> Result<String> {
        self.say(prompt)?;
        self.read_line()?
            .context("input ended while a field was expected")
    }

    fn say(&mut self, message: Message) -> Result<()> {
        if message.is_prompt() {
            write!(self.output, "{}", message)?;
            self.output.flush()?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
