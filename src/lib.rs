//! Single-letter command line options.
//!
//! Keys `a` through `z` are declared up front. A key given alone (`-k`) takes
//! every following argument up to the next `-` prefixed one as its values;
//! several keys may be combined in one argument (`-klm`) but then take none.
//!
//! ```
//! use letteropt::ArgParser;
//!
//! let mut parser = ArgParser::new(["prog", "-v", "-o", "a.out", "b.out"]);
//! parser.add_key('v', "verbose").unwrap();
//! parser.add_key('o', "output files").unwrap();
//! parser.parse().unwrap();
//!
//! assert!(parser.is_key_set('v').unwrap());
//! assert_eq!(parser.get_key_args('o').unwrap(), ["a.out", "b.out"]);
//! ```

pub mod cli;
pub mod error;
pub mod key;
pub mod parser;
pub mod usage;

pub use error::{Error, GetExitCode, Result};
pub use key::Key;
pub use parser::ArgParser;
