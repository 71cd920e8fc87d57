mod arg;
mod classifier;
mod conditional;
mod driver;
mod error;
mod executor;
mod formatter;
mod modifier;
mod parse;
mod scanner;
mod sql_writer;
mod substitution;
mod translator;
mod util;
mod value;

pub use ::anyhow::Context;
pub use arg::*;
pub use classifier::*;
pub use conditional::*;
pub use driver::*;
pub use error::*;
pub use executor::*;
pub use formatter::*;
pub use modifier::*;
pub use parse::*;
pub use scanner::*;
pub use sql_writer::*;
pub use substitution::*;
pub use translator::*;
pub use util::*;
pub use value::*;
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
