use crate::{
    Arg, Driver, Result, Translator,
    future::{self, Either},
};
use std::future::Future;

/// Metadata about modify operations (INSERT/UPDATE/DELETE).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsAffected {
    /// Total number of rows impacted.
    pub rows_affected: u64,
    /// Backend-specific last inserted identifier when available.
    pub last_insert_id: Option<i64>,
}

/// Seam between the translator and a connection: whatever can run SQL text.
pub trait Executor: Send + Sized {
    type Driver: Driver;

    fn driver(&self) -> &Self::Driver;

    /// Send already translated SQL to the backend.
    fn run(&mut self, sql: String) -> impl Future<Output = Result<RowsAffected>> + Send;

    /// Translate the arguments and run the result.
    ///
    /// Nothing is sent when the translation fails, or when the lenient policy turned the
    /// failure into an empty query.
    fn execute(
        &mut self,
        translator: &Translator<<Self::Driver as Driver>::SqlWriter>,
        args: &[Arg],
    ) -> impl Future<Output = Result<RowsAffected>> + Send {
        match translator.translate(args) {
            Ok(sql) if sql.is_empty() => Either::Left(future::ready(Ok(RowsAffected::default()))),
            Ok(sql) => Either::Right(self.run(sql)),
            Err(e) => Either::Left(future::ready(Err(e))),
        }
    }
}
