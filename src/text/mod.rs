//! Buffer text access.
//!
//! This module provides the read-only view over buffer lines and the
//! position arithmetic used to step across syntax nodes.

pub mod position;
mod source;

pub use position::{Position, convert_byte_to_char_in_line, next_position, previous_position};
pub use source::{RangeEnd, SourceText};
