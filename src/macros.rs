/* ---------------------------------------------------------------------------
** This software is in the public domain, furnished "as is", without technical
** support, and with no warranty, express or implied, as to its usefulness for
** any purpose.
**
** SPDX-License-Identifier: Unlicense
**
** -------------------------------------------------------------------------*/

//! `keyword=value` macros taken from the command line.

use crate::error::{Result, StampError};
use log::debug;
use std::collections::HashMap;

/// Split `text` on any of `delimiters`, never splitting inside a double
/// quoted span.
///
/// Pieces are trimmed of spaces. A piece wrapped in double quotes loses the
/// quotes, and is dropped if nothing is left inside them.
pub fn split_honouring_quotes(text: &str, delimiters: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let Some(mut start) = text.find(|c: char| c != ' ') else {
        return pieces;
    };

    let first = start;
    let mut inside_quotes = false;
    for (i, c) in text.char_indices().skip_while(move |&(i, _)| i < first) {
        if c == '"' {
            inside_quotes = !inside_quotes;
        } else if !inside_quotes && delimiters.contains(c) {
            if start != i {
                pieces.push(text[start..i].trim_matches(' ').to_string());
            }
            start = i + c.len_utf8();
        }
    }
    if start != text.len() {
        pieces.push(text[start..].trim_matches(' ').to_string());
    }

    pieces
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| match unquote(&piece) {
            Some(inner) if inner.is_empty() => None,
            Some(inner) => Some(inner.to_string()),
            None => Some(piece),
        })
        .collect()
}

/// The trimmed contents of `piece` if it starts and ends with a quote.
fn unquote(piece: &str) -> Option<&str> {
    if piece.len() >= 2 && piece.starts_with('"') && piece.ends_with('"') {
        Some(piece[1..piece.len() - 1].trim())
    } else if piece == "\"" {
        // a lone quote is both the first and last character
        Some("")
    } else {
        None
    }
}

/// Case-insensitive keyword to value mapping.
#[derive(Debug, Default, Clone)]
pub struct Macros {
    values: HashMap<String, String>,
}

impl Macros {
    /// Collect every well-formed `keyword=value` argument. Anything else is
    /// ignored.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut macros = Macros::default();
        for arg in args {
            let arg = arg.as_ref();
            let bits = split_honouring_quotes(arg, "=");
            let [key, value] = bits.as_slice() else {
                debug!("ignoring argument {:?}", arg);
                continue;
            };
            macros.insert(&key.replace('"', ""), &value.replace('"', ""))?;
        }
        debug!("macros: {:?}", macros.values);
        Ok(macros)
    }

    fn insert(&mut self, key: &str, value: &str) -> Result<()> {
        let folded = key.to_lowercase();
        if self.values.contains_key(&folded) {
            return Err(StampError::DuplicateMacro(key.to_string()));
        }
        self.values.insert(folded, value.to_string());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
