//! Reading integer sequences from arguments, files, or stdin.
//!
//! Values are separated by any mix of whitespace and commas.

use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Parse every integer in `text`, in order.
pub fn parse_values(text: &str) -> Result<Vec<i64>, CliError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|source| CliError::Parse {
                token: token.to_string(),
                position,
                source,
            })
        })
        .collect()
}

/// Values from positional arguments, else `file`, else stdin.
pub fn read_values(args: &[String], file: Option<&Path>) -> Result<Vec<i64>, CliError> {
    if !args.is_empty() {
        return parse_values(&args.join(" "));
    }

    let text = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_values(&text)
}
