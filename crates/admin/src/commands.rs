//! Console command grammar.

use harpal_client::models::page_seo::PageName;
use harpal_core::types::EntityId;
use harpal_dashboard::shell::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab(Tab),
    Tabs,
    List,
    Search(String),
    New,
    Edit(EntityId),
    Set { field: String, value: String },
    Show,
    Save,
    Cancel,
    Delete(EntityId),
    Refresh,
    Page(PageName),
    Login { email: String, password: String },
    Logout,
    Sidebar,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("{0}")]
    Invalid(String),
}

pub const HELP: &str = "\
Navigation
  tabs                      list tabs
  tab <id>                  open a tab (overview, jobs, users, categories, website, seo)
  sidebar                   collapse or expand the sidebar
Lists
  list                      show the current list (filtered by the search)
  search <text>             filter the list; 'search' alone clears it
  refresh                   re-fetch the current screen
  delete <id>               delete an entry (asks for confirmation)
Forms
  new                       open a blank form
  edit <id>                 open a form for an entry
  page <name>               pick the page on the SEO tab
  show                      show the open form
  set <field> <value>       change a form field
  save                      submit the open form
  cancel                    close the form without saving
Session
  login <email> <password>  sign in and keep the token for this session
  logout                    forget the token
  help                      this text
  quit                      exit";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "tab" => Command::Tab(required(rest, "tab <id>")?.parse().map_err(ParseError::Invalid)?),
        "tabs" => Command::Tabs,
        "list" | "ls" => Command::List,
        "search" => Command::Search(rest.to_string()),
        "new" => Command::New,
        "edit" => Command::Edit(EntityId::from(required(rest, "edit <id>")?)),
        "set" => {
            let rest = required(rest, "set <field> <value>")?;
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            Command::Set {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "show" => Command::Show,
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(EntityId::from(required(rest, "delete <id>")?)),
        "refresh" => Command::Refresh,
        "page" => Command::Page(required(rest, "page <name>")?.parse().map_err(ParseError::Invalid)?),
        "login" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(email), Some(password), None) => Command::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                _ => return Err(ParseError::Usage("login <email> <password>")),
            }
        }
        "logout" => Command::Logout,
        "sidebar" => Command::Sidebar,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::Usage(usage))
    } else {
        Ok(rest)
    }
}
