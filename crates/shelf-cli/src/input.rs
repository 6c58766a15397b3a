//! Line commands read from stdin while browsing.
//!
//! | Line | Meaning |
//! |------|---------|
//! | `/<text>` or `search <text>` | type into the search box |
//! | `sort <field>` | click a column header |
//! | `page <n>` | click a page button |
//! | `show` | print the current view again |
//! | `help` | list the commands |
//! | `quit` | leave |

use shelf_model::{ModelError, SortField};
use thiserror::Error;

/// One parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search box text.
    Search(String),
    /// Click a column header.
    Sort(SortField),
    /// Click a page button. Range checking is the controller's job.
    Page(u32),
    /// Print the current view.
    Show,
    /// Print the command list.
    Help,
    /// Leave the browser.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Blank line.
    #[error("empty input")]
    Empty,

    /// First word is not a command.
    #[error("unknown command '{0}', type 'help' for the list")]
    UnknownCommand(String),

    /// Command needs an argument that was not given.
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    /// Page argument is not a page number.
    #[error("'{0}' is not a page number")]
    InvalidPage(String),

    /// Sort argument is not a sortable field.
    #[error(transparent)]
    InvalidField(#[from] ModelError),
}

/// Command list printed by `help`.
pub const HELP: &str = "\
commands:
  /<text>, search <text>   search the catalog (empty text clears the search)
  sort <field>             sort by title, author, publisher or year (again to reverse)
  page <n>                 go to page n
  show                     print the current view
  help                     show this list
  quit                     leave";

/// Parse one input line.
pub fn parse_line(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    if let Some(text) = line.strip_prefix('/') {
        return Ok(Command::Search(text.trim().to_string()));
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    match word.to_ascii_lowercase().as_str() {
        "search" => Ok(Command::Search(rest.to_string())),
        "sort" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("sort"));
            }
            Ok(Command::Sort(rest.parse()?))
        }
        "page" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("page"));
            }
            rest.parse()
                .map(Command::Page)
                .map_err(|_| InputError::InvalidPage(rest.to_string()))
        }
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(InputError::UnknownCommand(word.to_string())),
    }
}
