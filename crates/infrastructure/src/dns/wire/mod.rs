//! Hand-rolled DNS wire format for single-question A queries and their
//! replies. All decoding goes through [`WireReader`], which refuses to read
//! past the end of a buffer.
pub mod header;
pub mod name;
pub mod query;
pub mod reader;
pub mod response;

pub use header::{decode_header, encode_header};
pub use name::{decode_name, encode_name};
pub use query::{build_query, parse_query};
pub use reader::WireReader;
pub use response::{build_response, parse_response};
