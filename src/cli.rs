//! Command-line argument parsing for the roster binary.
//!
//! This module handles parsing command-line arguments and determining
//! which command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show the favorites-only view
    Favorites,
    /// Flip the favorite state of a user on the current page, then show the list
    Toggle(i64),
    /// Remove a user from the favorites, then show the favorites view
    Remove(i64),
    /// Show the all-users list view (default)
    List,
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use roster::cli::{parse_args, CliCommand};
///
/// let args = vec!["roster".to_string(), "--favorites".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Favorites));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<CliCommand, String>
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let _ = args.next();

    if let Some(arg) = args.next() {
        return match arg.as_str() {
            "--version" | "-V" => Ok(CliCommand::Version),
            "--favorites" => Ok(CliCommand::Favorites),
            "--toggle" => parse_id(args.next(), "--toggle").map(CliCommand::Toggle),
            "--remove" => parse_id(args.next(), "--remove").map(CliCommand::Remove),
            other => Err(format!("unknown argument: {other}")),
        };
    }

    Ok(CliCommand::List)
}

fn parse_id(value: Option<String>, flag: &str) -> Result<i64, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a user id"))?;
    value
        .parse()
        .map_err(|_| format!("{flag} requires a numeric user id, got '{value}'"))
}
