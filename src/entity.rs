use std::borrow::Cow;

use crate::error::Error;

/// Resolve predefined entities and character references in parsed
/// content. Returns the input unchanged if there is nothing to resolve.
pub(crate) fn parse_entities(content: Cow<str>) -> Result<Cow<str>, Error> {
    if !content.contains('&') {
        return Ok(content);
    }
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }
        let mut entity = String::new();
        let mut is_complete = false;
        for c in chars.by_ref() {
            if c == ';' {
                is_complete = true;
                break;
            }
            entity.push(c);
        }
        if !is_complete {
            return Err(Error::UnclosedEntity(entity));
        }
        match entity.as_str() {
            "amp" => result.push('&'),
            "apos" => result.push('\''),
            "gt" => result.push('>'),
            "lt" => result.push('<'),
            "quot" => result.push('"'),
            _ => result.push(parse_character_reference(&entity)?),
        }
    }
    Ok(result.into())
}

fn parse_character_reference(entity: &str) -> Result<char, Error> {
    let code = match entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => match entity.strip_prefix('#') {
            Some(dec) => dec.parse(),
            None => return Err(Error::InvalidEntity(entity.to_string())),
        },
    };
    code.ok()
        .and_then(char::from_u32)
        .ok_or_else(|| Error::InvalidEntity(entity.to_string()))
}

/// Escape text content: `&`, `<` and `>`.
pub(crate) fn serialize_text(content: Cow<str>) -> Cow<str> {
    escape(content, false)
}

/// Escape an attribute value: `&`, `<`, `>` and `"`.
pub(crate) fn serialize_attribute(content: Cow<str>) -> Cow<str> {
    escape(content, true)
}

fn escape(content: Cow<str>, quotes: bool) -> Cow<str> {
    let mut result = String::new();
    let mut escaped = false;
    for c in content.chars() {
        match c {
            '&' => {
                escaped = true;
                result.push_str("&amp;")
            }
            '<' => {
                escaped = true;
                result.push_str("&lt;")
            }
            '>' => {
                escaped = true;
                result.push_str("&gt;")
            }
            '"' if quotes => {
                escaped = true;
                result.push_str("&quot;")
            }
            _ => result.push(c),
        }
    }
    if !escaped {
        content
    } else {
        result.into()
    }
}
