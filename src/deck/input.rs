//! Card token input from a file or standard input.

use std::io;
use std::path::Path;

use tokio::io::AsyncReadExt;

/// Split whitespace-separated card tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Read card tokens from `path`, or from standard input when `None`.
pub async fn read_tokens(path: Option<&Path>) -> io::Result<Vec<String>> {
    let text = match path {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };
    Ok(tokenize(&text))
}
