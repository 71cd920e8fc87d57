//! Stencil: the SQL template translator.
//!
//! A query is written as a list of arguments: literal SQL fragments interleaved with typed
//! values and inline directives (`%i`, `%s`, `%if` ... `%end`). The [`Translator`] of a
//! dialect compiles the list into one SQL string, escaping every value the way the dialect
//! expects.
//!
//! ```rust
//! use stencil::{GenericSqlWriter, Translator, args};
//! let translator = Translator::new(GenericSqlWriter::new());
//! let sql = translator
//!     .translate(&args!["SELECT * FROM [users] WHERE name = %s", "O'Brien"])
//!     .unwrap();
//! assert_eq!(sql, r#"SELECT * FROM "users" WHERE name = 'O''Brien'"#);
//! ```
pub use stencil_core::*;
