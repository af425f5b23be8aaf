use std::fmt;

/// One line of input to the interactive shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the mood; an empty argument clears it
    Mood(String),
    AddIngredient(String),
    DropIngredient(usize),
    ToggleDiet(String),
    Preferences,
    Search,
    Show(u64),
    ToggleSave(u64),
    Saved,
    Moods,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCommandError(String);

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseCommandError {}

pub const HELP: &str = "\
Commands:
  mood <mood>          set your mood (empty to clear)
  add <ingredient>     add an ingredient you have at home
  drop <index>         remove an ingredient by its index
  diet <tag>           toggle a dietary restriction
  prefs                show current preferences
  search               find recipes
  show <id>            show a recipe
  save <id>            save or unsave a recipe
  saved                list saved recipes
  moods                list moods and dietary options
  help                 show this help
  quit                 exit";

impl Command {
    /// Parse a shell line. Returns `Ok(None)` for blank input.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseCommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "mood" => Command::Mood(rest.to_string()),
            "add" => Command::AddIngredient(required(word, rest)?.to_string()),
            "drop" => Command::DropIngredient(number(word, rest)?),
            "diet" => Command::ToggleDiet(required(word, rest)?.to_string()),
            "prefs" => Command::Preferences,
            "search" => Command::Search,
            "show" => Command::Show(number(word, rest)?),
            "save" => Command::ToggleSave(number(word, rest)?),
            "saved" => Command::Saved,
            "moods" => Command::Moods,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ParseCommandError(format!(
                    "Unknown command '{}', type 'help' for a list",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn required<'a>(word: &str, rest: &'a str) -> Result<&'a str, ParseCommandError> {
    if rest.is_empty() {
        Err(ParseCommandError(format!("'{}' needs an argument", word)))
    } else {
        Ok(rest)
    }
}

fn number<T: std::str::FromStr>(word: &str, rest: &str) -> Result<T, ParseCommandError> {
    required(word, rest)?
        .parse()
        .map_err(|_| ParseCommandError(format!("'{}' expects a number, got '{}'", word, rest)))
}
