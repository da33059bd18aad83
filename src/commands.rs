//! Text command front end.
//!
//! Turns lines like `add Ann 0501234567` into calls on the address book and
//! renders the outcome, success or failure, as a reply string. Errors never
//! escape `Assistant::handle`; they become the reply text instead.

use crate::birthdays::{weekday_name, DEFAULT_WINDOW_DAYS};
use crate::directory::Directory;
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::str::FromStr;

/// A verb the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add <name> [phone]`
    Add,
    /// `change <name> <old phone> <new phone>`
    Change,
    /// `remove_phone <name> <phone>`
    RemovePhone,
    /// `phone <name>`
    Phone,
    /// `all`
    All,
    /// `add-birthday <name> <DD.MM.YYYY>`
    AddBirthday,
    /// `show-birthday <name>`
    ShowBirthday,
    /// `birthdays`
    Birthdays,
    /// `delete <name>`
    Delete,
    /// `close` or `exit`
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "remove_phone" => Ok(Command::RemovePhone),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "delete" => Ok(Command::Delete),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Split a line into a lowercased verb and its whitespace-separated
/// arguments.
///
/// # Errors
///
/// - `CommandError::EmptyInput` for a blank line
/// - `CommandError::UnknownCommand` if the verb is not recognised
pub fn parse_input(line: &str) -> CommandResult<(Command, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().ok_or(CommandError::EmptyInput)?.to_lowercase();
    let command = verb.parse()?;
    let args = parts.map(str::to_string).collect();
    Ok((command, args))
}

/// What the caller should do after printing a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command
    Continue(String),
    /// Print the text and stop
    Exit(String),
}

impl Reply {
    /// The text to show the user.
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

const CHANGE_USAGE: &str =
    "Please provide a name, the phone number to edit, and the new phone number.";
const REMOVE_PHONE_USAGE: &str = "Please provide both a name and a phone number to remove.";
const NAME_USAGE: &str = "Please provide a name.";
const ADD_BIRTHDAY_USAGE: &str = "Please provide a name and Birthday date.";

/// Interactive assistant holding one address book.
#[derive(Debug, Clone)]
pub struct Assistant {
    directory: Directory,
    window_days: u32,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl Assistant {
    /// Create an assistant with an empty address book.
    pub fn new(window_days: u32) -> Self {
        Self {
            directory: Directory::new(),
            window_days,
        }
    }

    /// The address book being edited.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Handle one line of user input, using `today` for birthday queries.
    ///
    /// Failures are rendered as the reply text; the assistant keeps running.
    pub fn handle(&mut self, line: &str, today: NaiveDate) -> Reply {
        let (command, args) = match parse_input(line) {
            Ok(parsed) => parsed,
            Err(e) => return Reply::Continue(e.to_string()),
        };

        if command == Command::Exit {
            return Reply::Exit("Goodbye!".to_string());
        }

        tracing::debug!(?command, args = args.len(), "Dispatching command");
        match self.execute(command, &args, today) {
            Ok(text) => Reply::Continue(text),
            Err(e) => {
                tracing::debug!(?command, error = %e, "Command failed");
                Reply::Continue(e.to_string())
            }
        }
    }

    /// Run a parsed command.
    pub fn execute(
        &mut self,
        command: Command,
        args: &[String],
        today: NaiveDate,
    ) -> CommandResult<String> {
        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => self.add_contact(args),
            Command::Change => self.change_phone(args),
            Command::RemovePhone => self.remove_phone(args),
            Command::Phone => self.show_phones(args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday => self.add_birthday(args),
            Command::ShowBirthday => self.show_birthday(args),
            Command::Birthdays => Ok(self.upcoming_birthdays(today)),
            Command::Delete => self.delete_contact(args),
            Command::Exit => Ok("Goodbye!".to_string()),
        }
    }

    fn add_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, rest @ ..] = args else {
            return Err(CommandError::MissingArguments { usage: NAME_USAGE });
        };
        let phone = rest.first();
        // The reply says "updated" whenever a phone was given, new contact or not.
        let verb = if phone.is_some() { "updated" } else { "added" };

        if let Some(record) = self.directory.find_mut(name) {
            if let Some(phone) = phone {
                record.add_phone(phone)?;
            }
            return Ok(format!("Contact {}: {}", verb, name));
        }

        // Not inserted until the phone is accepted, so a bad phone leaves no empty record.
        let mut record = Record::new(ContactName::new(name.as_str())?);
        if let Some(phone) = phone {
            record.add_phone(phone)?;
        }
        self.directory.add_record(record);
        Ok(format!("Contact {}: {}", verb, name))
    }

    fn change_phone(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, old, new, ..] = args else {
            return Err(CommandError::MissingArguments {
                usage: CHANGE_USAGE,
            });
        };
        self.record_mut(name)?.edit_phone(old, new)?;
        Ok(format!("Phone {} changed to {}.", old, new))
    }

    fn remove_phone(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone, ..] = args else {
            return Err(CommandError::MissingArguments {
                usage: REMOVE_PHONE_USAGE,
            });
        };
        self.record_mut(name)?.remove_phone(phone)?;
        Ok(format!("Phone {} removed.", phone))
    }

    fn show_phones(&self, args: &[String]) -> CommandResult<String> {
        let [name, ..] = args else {
            return Err(CommandError::MissingArguments { usage: NAME_USAGE });
        };
        let record = self.record(name)?;
        if record.phones().is_empty() {
            return Ok(format!("'{}' has no phone numbers.", name));
        }
        Ok(format!("{}: {}", name, record.phones_display()))
    }

    fn show_all(&self) -> String {
        if self.directory.is_empty() {
            return "Contact list is empty.".to_string();
        }

        let mut lines = vec!["Contacts list:".to_string()];
        lines.extend(
            self.directory
                .iter()
                .map(|record| format!("{}: {}", record.name(), record)),
        );
        lines.join("\n")
    }

    fn add_birthday(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, birthday, ..] = args else {
            return Err(CommandError::MissingArguments {
                usage: ADD_BIRTHDAY_USAGE,
            });
        };
        self.record_mut(name)?.add_birthday(birthday)?;
        Ok("Birthday was added.".to_string())
    }

    fn show_birthday(&self, args: &[String]) -> CommandResult<String> {
        let [name, ..] = args else {
            return Err(CommandError::MissingArguments { usage: NAME_USAGE });
        };
        match self.record(name)?.birthday() {
            Some(birthday) => Ok(format!("Birthday date for '{}' is {}", name, birthday)),
            None => Ok(format!("'{}' does not have a birthday set.", name)),
        }
    }

    fn upcoming_birthdays(&self, today: NaiveDate) -> String {
        if self.directory.is_empty() {
            return "Contact list is empty.".to_string();
        }

        let upcoming = self
            .directory
            .upcoming_birthdays_within(today, self.window_days);
        if upcoming.is_empty() {
            return if self.window_days == DEFAULT_WINDOW_DAYS {
                "No upcoming birthdays in the next week.".to_string()
            } else {
                format!("No upcoming birthdays in the next {} days.", self.window_days)
            };
        }

        let mut lines = vec!["Upcoming Birthdays:".to_string()];
        lines.extend(
            upcoming
                .iter()
                .map(|(day, names)| format!("{}: {}", weekday_name(day), names.join(", "))),
        );
        lines.join("\n")
    }

    fn delete_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, ..] = args else {
            return Err(CommandError::MissingArguments { usage: NAME_USAGE });
        };
        self.directory.delete(name)?;
        Ok(format!("Record for {} deleted.", name))
    }

    fn record(&self, name: &str) -> CommandResult<&Record> {
        self.directory
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        self.directory
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }
}
