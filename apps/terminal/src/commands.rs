use directory_core::UiEvent;
use shared::{
    domain::{AgeBracket, GenderFilter, SearchField, SortKey, ViewMode},
    error::UnknownOption,
};
use thiserror::Error;

use crate::panel::Panel;

pub const HELP: &str = "\
commands:
  search <text>          filter by free text (empty clears)
  field name|location|email
  gender all|male|female
  age all|18-30|31-50|51+
  sort name|age|location
  next | prev            change page
  grid | list            change view mode
  fav <row>              toggle favorite for a row on this page
  open <row>             show details for a row on this page
  close                  close the details
  copy email|phone       copy from the open details
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Field(SearchField),
    Gender(GenderFilter),
    Age(AgeBracket),
    Sort(SortKey),
    Next,
    Prev,
    View(ViewMode),
    Favorite(usize),
    Open(usize),
    Close,
    CopyEmail,
    CopyPhone,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' for the list")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error(transparent)]
    Option(#[from] UnknownOption),
    #[error("'{0}' is not a row number")]
    BadRow(String),
    #[error("row {0} is not on this page")]
    NoSuchRow(usize),
    #[error("no details are open")]
    NoDetails,
}

/// What the reader should do with a parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Event(UiEvent),
    Help,
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Search(rest.to_string()),
        "field" => Command::Field(required("field", "a search field", rest)?.parse()?),
        "gender" => Command::Gender(required("gender", "a gender", rest)?.parse()?),
        "age" => Command::Age(required("age", "an age bracket", rest)?.parse()?),
        "sort" => Command::Sort(required("sort", "a sort key", rest)?.parse()?),
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "grid" => Command::View(ViewMode::Grid),
        "list" => Command::View(ViewMode::List),
        "view" => Command::View(required("view", "grid or list", rest)?.parse()?),
        "fav" | "f" => Command::Favorite(row_number(required("fav", "a row number", rest)?)?),
        "open" | "o" => Command::Open(row_number(required("open", "a row number", rest)?)?),
        "close" | "c" => Command::Close,
        "copy" => match required("copy", "email or phone", rest)?
            .to_ascii_lowercase()
            .as_str()
        {
            "email" => Command::CopyEmail,
            "phone" => Command::CopyPhone,
            other => {
                return Err(UnknownOption::new("copy target", other, ["email", "phone"]).into())
            }
        },
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(command)
}

fn required<'a>(
    command: &'static str,
    expected: &'static str,
    rest: &'a str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn row_number(text: &str) -> Result<usize, CommandError> {
    text.parse::<usize>()
        .map_err(|_| CommandError::BadRow(text.to_string()))
}

/// Applies control edits to the panel and resolves row numbers against what is
/// currently on screen.
pub fn dispatch(command: Command, panel: &Panel) -> Result<Dispatch, CommandError> {
    let event = match command {
        Command::Search(text) => {
            panel.update_controls(|query| query.search_text = text);
            UiEvent::SearchInput
        }
        Command::Field(field) => {
            panel.update_controls(|query| query.search_field = field);
            UiEvent::SelectorChanged
        }
        Command::Gender(gender) => {
            panel.update_controls(|query| query.gender = gender);
            UiEvent::SelectorChanged
        }
        Command::Age(age) => {
            panel.update_controls(|query| query.age = age);
            UiEvent::SelectorChanged
        }
        Command::Sort(sort) => {
            panel.update_controls(|query| query.sort = sort);
            UiEvent::SelectorChanged
        }
        Command::Next => UiEvent::NextPage,
        Command::Prev => UiEvent::PrevPage,
        Command::View(mode) => UiEvent::SetViewMode(mode),
        Command::Favorite(row) => {
            UiEvent::ToggleFavorite(panel.row(row).ok_or(CommandError::NoSuchRow(row))?)
        }
        Command::Open(row) => {
            UiEvent::OpenDetails(panel.row(row).ok_or(CommandError::NoSuchRow(row))?)
        }
        Command::Close => UiEvent::CloseDetails,
        Command::CopyEmail => UiEvent::CopyEmail(panel.details().ok_or(CommandError::NoDetails)?),
        Command::CopyPhone => UiEvent::CopyPhone(panel.details().ok_or(CommandError::NoDetails)?),
        Command::Help => return Ok(Dispatch::Help),
        Command::Quit => UiEvent::Quit,
    };
    Ok(Dispatch::Event(event))
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
