use crate::entry::{AttributeValue, CompositeValue, Entry};
use crate::error::{InvalidEntry, Result};
use crate::schema::{Attribute, SchemaRegistry};
use crate::token::Token;

use indexmap::IndexMap;
use log::warn;

use std::slice::Iter;

/// Builds an [`Entry`] from the tokens of one line.
///
/// `first_token` names the entry; the remaining tokens are matched
/// positionally against the attribute descriptors the registry holds for
/// that label. Unknown labels fail unless `lenient` is set, in which case an
/// entry without attributes is returned.
pub fn assemble<R: SchemaRegistry + ?Sized>(
    line: &str,
    first_token: Option<&Token>,
    tokens: &[Token],
    lenient: bool,
    registry: &R,
) -> Result<Entry> {
    let label = first_token.and_then(Token::label).unwrap_or_default();

    match (first_token.and_then(Token::label), registry.lookup(label)) {
        (Some(_), Some(attributes)) => build_complete_entry(line, label, attributes, tokens),
        (_, _) if lenient => {
            warn!("skipping attributes of unknown entry type `{}'", label);
            Ok(Entry::new(label))
        }
        (Some(_), None) => Err(InvalidEntry::UnknownEntryType(label.to_string()).into()),
        (None, _) => Err(InvalidEntry::UnknownEntryType(
            first_token.map(Token::to_string).unwrap_or_default(),
        )
        .into()),
    }
}

fn build_complete_entry(
    line: &str,
    label: &str,
    schema: &[Attribute],
    tokens: &[Token],
) -> Result<Entry> {
    let mut cursor = tokens.iter();
    let mut attributes = IndexMap::new();

    for attribute in schema {
        let token = match cursor.next() {
            Some(token) => token,
            None => continue,
        };

        let value = match *attribute {
            Attribute::Scalar(_) => scalar_value(token)?,
            Attribute::Composite {
                name,
                key,
                value,
                many,
            } => {
                if *token != Token::BeginArray {
                    return Err(InvalidEntry::UnexpectedToken(token.clone()).into());
                }
                let values = array_values(&mut cursor);
                // Pairs are taken consecutively; a trailing odd value is dropped.
                let pairs: Vec<_> = values
                    .chunks_exact(2)
                    .map(|pair| CompositeValue::new(key, pair[0], value, pair[1]))
                    .collect();
                if !many && pairs.len() > 1 {
                    return Err(InvalidEntry::MoreThanOnePair {
                        attribute: name,
                        line: line.to_string(),
                    }
                    .into());
                }
                AttributeValue::Composite(pairs)
            }
        };

        attributes.insert(attribute.name(), value);
    }

    Ok(Entry::with_attributes(label, attributes))
}

fn scalar_value(token: &Token) -> Result<AttributeValue> {
    token
        .value()
        .map(|value| AttributeValue::Scalar(value.to_string()))
        .ok_or_else(|| InvalidEntry::UnexpectedToken(token.clone()).into())
}

/// Collects values up to the matching `}` (or the end of the line).
/// Nested braces only move the depth; their values are kept in order.
fn array_values<'t>(cursor: &mut Iter<'t, Token>) -> Vec<&'t str> {
    let mut values = Vec::new();
    let mut depth = 1usize;

    for token in cursor.by_ref() {
        match token {
            Token::BeginArray => depth += 1,
            Token::EndArray => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Token::EntryLabel(value) | Token::StringValue(value) => values.push(value.as_str()),
        }
    }

    values
}
