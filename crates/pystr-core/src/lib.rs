//! # pystr-core
//!
//! Pure operation cores for the pystr text library, `no_std` compatible.
//!
//! This crate provides the logic layer used by the public `pystr` crate:
//! - `ascii` - ASCII character class tables and predicates
//! - `seq` - eager map/filter combinators over materialized sequences
//! - `strings` - substring search, splicing, and split/join cores
//! - `lines` - newline-normalizing line splitter

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ascii;
pub mod lines;
pub mod seq;
pub mod strings;

pub use lines::{split_lines, split_no_blank_lines};
pub use seq::{filter, map};
