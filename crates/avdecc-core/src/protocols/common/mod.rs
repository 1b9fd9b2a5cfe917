//! Byte-level helpers shared by the header, ADP, ACMP and AECP codecs.

pub mod bits;
pub(crate) mod reader;
pub(crate) mod writer;
