//! sie - Encoder and decoder for the SIE accounting interchange format
//! ---
//!
//! SIE is the line-oriented format Swedish accounting software uses to exchange
//! accounts, dimensions, balances and vouchers, one record per line:
//! `#LABEL value "quoted value" {nested values}`.
//!
//! Decoding goes line by line: the [tokenizer] splits a line into tokens, the
//! [assembler] maps them onto the attribute schema of the line's label, and the
//! [parser] groups the resulting entries into a [`SieFile`].
//! Encoding renders a [`DataSource`] through a [`Document`].
//!

extern crate pest;
#[macro_use]
extern crate pest_derive;

/// Builds entries from tokens according to the attribute schema.
pub mod assembler;

/// Bookkeeping data consumed by the encoder.
pub mod data_source;
pub mod document;
pub mod entry;
pub mod error;

/// Our main parser entrypoints.
///
/// [`parse_line`][parser::parse_line] decodes a single line;
/// [`Parser`][parser::Parser] decodes a whole document, attaching the entries
/// of a `{ ... }` block to the entry right before it.
pub mod parser;

pub mod renderer;

/// Known entry labels and their attributes.
pub mod schema;
pub mod sie_file;
pub mod token;
pub mod tokenizer;

pub use data_source::DataSource;
pub use document::Document;
pub use entry::{AttributeValue, CompositeValue, Entry};
pub use error::{Error, InvalidEntry};
pub use parser::{parse, parse_file, parse_line, Parser, ParserOptions};
pub use sie_file::SieFile;
pub use token::Token;
pub use tokenizer::tokenize;
