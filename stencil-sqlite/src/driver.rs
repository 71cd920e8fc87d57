use crate::SQLiteSqlWriter;
use stencil_core::Driver;

#[derive(Debug, Default, Clone, Copy)]
pub struct SQLiteDriver {}

impl SQLiteDriver {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Driver for SQLiteDriver {
    type SqlWriter = SQLiteSqlWriter;

    const NAME: &'static str = "sqlite";
    fn sql_writer(&self) -> SQLiteSqlWriter {
        SQLiteSqlWriter {}
    }
}
