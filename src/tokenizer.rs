use crate::error::{Error, Result};
use crate::token::Token;
use pest::iterators::Pair;
use pest::Parser;

#[derive(Parser)]
#[grammar = "sie.pest"]
pub struct LineParser;

/// Splits one raw SIE line into tokens.
///
/// Rules are tried at the cursor in the order given by the `token` rule of
/// the grammar; whitespace is consumed without producing a token. A cursor
/// that cannot advance is fatal.
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    check_for_control_characters(line)?;

    let mut tokens = Vec::new();
    let mut position = 0;

    while position < line.len() {
        let remainder = &line[position..];
        let token = LineParser::parse(Rule::token, remainder)
            .ok()
            .and_then(|mut pairs| pairs.next())
            .filter(|pair| pair.as_span().end() > 0)
            .ok_or_else(|| Error::UnrecognizedCharacter {
                position,
                line: line.to_string(),
                remainder: remainder.to_string(),
            })?;

        position += token.as_span().end();
        if let Some(token) = token.into_inner().next().and_then(into_token) {
            tokens.push(token);
        }
    }

    Ok(tokens)
}

fn check_for_control_characters(line: &str) -> Result<()> {
    match line.char_indices().find(|&(_, c)| is_control(c)) {
        Some((position, _)) => Err(Error::ControlCharacter {
            position,
            line: line.to_string(),
        }),
        None => Ok(()),
    }
}

fn is_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0A}'..='\u{1F}' | '\u{7F}')
}

fn into_token(pair: Pair<'_, Rule>) -> Option<Token> {
    match pair.as_rule() {
        Rule::label => Some(Token::EntryLabel(pair.as_str()[1..].to_string())),
        Rule::begin_array => Some(Token::BeginArray),
        Rule::end_array => Some(Token::EndArray),
        Rule::quoted => {
            let inner = pair.into_inner().next().map_or("", |text| text.as_str());
            Some(Token::StringValue(unescape(inner)))
        }
        Rule::unquoted => Some(Token::StringValue(unescape(pair.as_str()))),
        _ => None,
    }
}

/// Resolves `\"` and `\\`; any other backslash is kept as is.
fn unescape(raw: &str) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&escaped @ ('\\' | '"')) = chars.peek() {
                value.push(escaped);
                chars.next();
                continue;
            }
        }
        value.push(c);
    }

    value
}
