use crate::assembler::assemble;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::schema::{SchemaRegistry, Sie4};
use crate::sie_file::SieFile;
use crate::tokenizer::tokenize;

use anyhow::Context;
use log::debug;

use std::fs;
use std::path::Path;

pub const BEGINNING_OF_ARRAY: &str = "{";
pub const END_OF_ARRAY: &str = "}";

/// Decoding policy shared by every line of a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Turn unknown labels into attribute-less entries instead of failing.
    pub lenient: bool,
}

impl ParserOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }
}

/// Decodes a single line against the SIE 4 schema.
pub fn parse_line(line: &str, lenient: bool) -> Result<Entry> {
    parse_line_with(line, lenient, &Sie4)
}

pub fn parse_line_with<R: SchemaRegistry + ?Sized>(
    line: &str,
    lenient: bool,
    registry: &R,
) -> Result<Entry> {
    let tokens = tokenize(line)?;
    match tokens.split_first() {
        Some((first_token, rest)) => assemble(line, Some(first_token), rest, lenient, registry),
        None => assemble(line, None, &[], lenient, registry),
    }
}

/// Groups decoded lines into a document tree.
///
/// A line holding only `{` opens a block owned by the entry right before
/// it; entries up to the matching `}` become that entry's children.
#[derive(Clone, Debug, Default)]
pub struct Parser<R = Sie4> {
    options: ParserOptions,
    registry: R,
}

impl Parser {
    pub fn new(options: ParserOptions) -> Self {
        Self::with_registry(options, Sie4)
    }
}

impl<R: SchemaRegistry> Parser<R> {
    pub fn with_registry(options: ParserOptions, registry: R) -> Self {
        Self { options, registry }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    pub fn parse(&self, input: &str) -> Result<SieFile> {
        let mut root: Vec<Entry> = Vec::new();
        let mut open: Vec<Entry> = Vec::new();

        for (idx, line) in input.lines().enumerate() {
            let line_number = idx + 1;

            match line.trim() {
                BEGINNING_OF_ARRAY => {
                    let parent = current(&mut root, &mut open)
                        .pop()
                        .ok_or(Error::UnbalancedBlock { line_number })?;
                    debug!("line {}: opening block of `{}'", line_number, parent.label());
                    open.push(parent);
                }
                END_OF_ARRAY => {
                    let parent = open.pop().ok_or(Error::UnbalancedBlock { line_number })?;
                    debug!("line {}: closing block of `{}'", line_number, parent.label());
                    current(&mut root, &mut open).push(parent);
                }
                entry if entry.starts_with('#') => {
                    let entry = parse_line_with(line, self.options.lenient, &self.registry)?;
                    current(&mut root, &mut open).push(entry);
                }
                other => debug!("line {}: skipping `{}'", line_number, other),
            }
        }

        while let Some(parent) = open.pop() {
            debug!("closing unterminated block of `{}'", parent.label());
            current(&mut root, &mut open).push(parent);
        }

        Ok(SieFile::new(root))
    }
}

fn current<'a>(root: &'a mut Vec<Entry>, open: &'a mut [Entry]) -> &'a mut Vec<Entry> {
    match open.last_mut() {
        Some(parent) => &mut parent.entries,
        None => root,
    }
}

/// Parses a whole document with default (strict) options.
pub fn parse(input: &str) -> Result<SieFile> {
    Parser::new(ParserOptions::default()).parse(input)
}

pub fn parse_file(path: &Path, options: ParserOptions) -> anyhow::Result<SieFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("unable to read SIE file `{}'", path.display()))?;
    Parser::new(options)
        .parse(&content)
        .with_context(|| format!("unable to parse SIE file `{}'", path.display()))
}
