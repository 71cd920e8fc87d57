use crate::MySQLSqlWriter;
use stencil_core::Driver;

#[derive(Debug, Default, Clone, Copy)]
pub struct MySQLDriver {}

impl MySQLDriver {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Driver for MySQLDriver {
    type SqlWriter = MySQLSqlWriter;

    const NAME: &'static str = "mysql";
    fn sql_writer(&self) -> MySQLSqlWriter {
        MySQLSqlWriter {}
    }
}
