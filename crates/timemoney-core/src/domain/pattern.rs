//! Date pattern translation.
//!
//! Patterns come in two flavours. Anything containing `[` is already a `time`
//! format description and is used untouched. Everything else is read as a
//! classic letter pattern (`yyyy-MM-dd`, `dd-MMM-yyyy HH:mm`) and rewritten
//! into the equivalent `time` description. Text inside single quotes is
//! literal and `''` is an escaped quote.

use crate::ValidationError;

const TWO_DIGIT_YEAR: &str = "[year repr:last_two]";

pub(crate) fn to_format_description(pattern: &str) -> Result<String, ValidationError> {
    if pattern.contains('[') {
        return Ok(pattern.to_owned());
    }

    let invalid = || ValidationError::InvalidPattern {
        pattern: pattern.to_owned(),
    };

    let chars: Vec<char> = pattern.chars().collect();
    let mut description = String::with_capacity(pattern.len() * 4);
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];

        if ch == '\'' {
            if chars.get(index + 1) == Some(&'\'') {
                description.push('\'');
                index += 2;
                continue;
            }
            index += 1;
            loop {
                match chars.get(index) {
                    None => return Err(invalid()),
                    Some('\'') if chars.get(index + 1) == Some(&'\'') => {
                        description.push('\'');
                        index += 2;
                    }
                    Some('\'') => {
                        index += 1;
                        break;
                    }
                    Some(&literal) => {
                        description.push(literal);
                        index += 1;
                    }
                }
            }
            continue;
        }

        if !ch.is_ascii_alphabetic() {
            description.push(ch);
            index += 1;
            continue;
        }

        let run = chars[index..].iter().take_while(|&&c| c == ch).count();
        description.push_str(component(ch, run).ok_or_else(invalid)?);
        index += run;
    }

    Ok(description)
}

/// Description for reading text back. Two-digit years are refused: they do
/// not name a century, so no date can be built from them.
pub(crate) fn to_parse_description(pattern: &str) -> Result<String, ValidationError> {
    let description = to_format_description(pattern)?;
    if description.contains("repr:last_two") {
        return Err(ValidationError::InvalidPattern {
            pattern: pattern.to_owned(),
        });
    }

    Ok(description)
}

fn component(letter: char, width: usize) -> Option<&'static str> {
    let translated = match (letter, width) {
        ('y', 2) => TWO_DIGIT_YEAR,
        ('y', _) => "[year]",
        ('M', 1) => "[month padding:none]",
        ('M', 2) => "[month]",
        ('M', 3) => "[month repr:short]",
        ('M', _) => "[month repr:long]",
        ('d', 1) => "[day padding:none]",
        ('d', 2) => "[day]",
        ('H', 1) => "[hour padding:none]",
        ('H', 2) => "[hour]",
        ('h', 1) => "[hour repr:12 padding:none]",
        ('h', 2) => "[hour repr:12]",
        ('a', 1) => "[period]",
        ('m', 1) => "[minute padding:none]",
        ('m', 2) => "[minute]",
        ('s', 1) => "[second padding:none]",
        ('s', 2) => "[second]",
        ('S', 1) => "[subsecond digits:1]",
        ('S', 2) => "[subsecond digits:2]",
        ('S', 3) => "[subsecond digits:3]",
        ('E', 1..=3) => "[weekday repr:short]",
        ('E', _) => "[weekday]",
        _ => return None,
    };
    Some(translated)
}
