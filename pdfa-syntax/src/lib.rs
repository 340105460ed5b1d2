/*!
A small, already-resolved PDF object model.

This crate does not parse PDF files. It models the objects a validator works
with once a document has been read and all indirect references have been
resolved: names, numbers, strings, arrays, dictionaries and streams. Streams
know how to apply the filters declared in their dictionary, so that consumers
can work with the decoded bytes directly.

## Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
pub mod filter;
pub mod object;
mod util;

pub use error::{DecodeError, Result};
pub use util::OptionLog;
