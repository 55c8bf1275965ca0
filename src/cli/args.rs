//! Command-line argument parsing.

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the first `pages` list pages
    List { pages: u32 },
    /// Fetch and print one entry
    Show { query: String },
    /// Fetch an entry and add it to favorites
    FavAdd { query: String },
    /// Remove a favorite by id
    FavRemove { id: u32 },
    /// Print favorites in display order
    FavList,
    /// Print the active theme, optionally toggling it first
    Theme { toggle: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("invalid {what}: '{value}'")]
    Invalid { what: &'static str, value: String },
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

pub const USAGE: &str = "\
usage: pokedex <command>

commands:
  list [PAGES]          print the first PAGES pages of the catalogue (default 1)
  show <NAME|ID>        print one entry with localized abilities
  fav add <NAME|ID>     add an entry to favorites
  fav remove <ID>       remove a favorite
  fav list              print favorites
  theme [--toggle]      print the active theme

flags:
  -V, --version         print version
  -h, --help            print this help";

/// Parse command-line arguments (including the program name).
///
/// # Examples
///
/// ```
/// use pokedex::cli::{parse_args, CliCommand};
///
/// let args = vec!["pokedex".to_string(), "show".to_string(), "25".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     Ok(CliCommand::Show { query: "25".to_string() })
/// );
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();
    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        return Ok(CliCommand::Version);
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(CliCommand::Help);
    }

    let mut rest = args.iter().map(String::as_str);
    match rest.next() {
        None => Ok(CliCommand::Help),
        Some("list") => {
            let pages = match rest.next() {
                None => 1,
                Some(raw) => parse_number(raw, "page count")?,
            };
            Ok(CliCommand::List { pages })
        }
        Some("show") => Ok(CliCommand::Show {
            query: join_query(rest)?,
        }),
        Some("fav") => match rest.next() {
            Some("add") => Ok(CliCommand::FavAdd {
                query: join_query(rest)?,
            }),
            Some("remove") | Some("rm") => {
                let raw = rest.next().ok_or(ArgsError::Missing("favorite id"))?;
                Ok(CliCommand::FavRemove {
                    id: parse_number(raw, "favorite id")?,
                })
            }
            Some("list") | None => Ok(CliCommand::FavList),
            Some(other) => Err(ArgsError::UnknownCommand(format!("fav {}", other))),
        },
        Some("theme") => Ok(CliCommand::Theme {
            toggle: rest.any(|arg| arg == "--toggle"),
        }),
        Some(other) => Err(ArgsError::UnknownCommand(other.to_string())),
    }
}

fn parse_number(raw: &str, what: &'static str) -> Result<u32, ArgsError> {
    raw.parse().map_err(|_| ArgsError::Invalid {
        what,
        value: raw.to_string(),
    })
}

/// Multi-word queries are joined back with spaces.
fn join_query<'a>(rest: impl Iterator<Item = &'a str>) -> Result<String, ArgsError> {
    let query = rest.collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        Err(ArgsError::Missing("name or number"))
    } else {
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let args: Vec<String> = std::iter::once("pokedex")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["list", "-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_no_args_is_help() {
        assert_eq!(parse(&[]), Ok(CliCommand::Help));
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse(&["list"]), Ok(CliCommand::List { pages: 1 }));
        assert_eq!(parse(&["list", "3"]), Ok(CliCommand::List { pages: 3 }));
        assert!(matches!(
            parse(&["list", "many"]),
            Err(ArgsError::Invalid { .. })
        ));
    }

    #[test]
    fn test_parse_show_joins_words() {
        assert_eq!(
            parse(&["show", "mr", "mime"]),
            Ok(CliCommand::Show {
                query: "mr mime".to_string()
            })
        );
        assert_eq!(parse(&["show"]), Err(ArgsError::Missing("name or number")));
    }

    #[test]
    fn test_parse_fav_subcommands() {
        assert_eq!(
            parse(&["fav", "add", "pikachu"]),
            Ok(CliCommand::FavAdd {
                query: "pikachu".to_string()
            })
        );
        assert_eq!(
            parse(&["fav", "remove", "25"]),
            Ok(CliCommand::FavRemove { id: 25 })
        );
        assert_eq!(parse(&["fav"]), Ok(CliCommand::FavList));
        assert_eq!(parse(&["fav", "list"]), Ok(CliCommand::FavList));
        assert_eq!(
            parse(&["fav", "remove"]),
            Err(ArgsError::Missing("favorite id"))
        );
        assert!(matches!(
            parse(&["fav", "star"]),
            Err(ArgsError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse(&["theme"]), Ok(CliCommand::Theme { toggle: false }));
        assert_eq!(
            parse(&["theme", "--toggle"]),
            Ok(CliCommand::Theme { toggle: true })
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse(&["catch"]),
            Err(ArgsError::UnknownCommand("catch".to_string()))
        );
    }
}
