//! # pystr
//!
//! Python-style string operations over an owned UTF-8 text value.
//!
//! [`PyStr`] mirrors a familiar subset of the Python `str` API: substring
//! search, stripping, case transforms, splitting, repetition, membership
//! tests, and newline-normalizing line splitting. In-place operations
//! return `&mut Self` so calls can be chained; derived operations return
//! new, independent values.
//!
//! ```
//! use pystr::PyStr;
//!
//! let mut s = PyStr::new("  hello world\n");
//! s.strip().capitalize();
//! assert_eq!(s.as_str(), "Hello World");
//! assert_eq!(s.find("World"), 6);
//! ```

mod error;
mod text;

pub use error::Error;
pub use text::PyStr;

pub use pystr_core::{ascii, seq};
