use crate::{GenericSqlWriter, SqlWriter, Translator};

/// Dialect entry point, a backend implements it to plug its escaping rules.
pub trait Driver {
    type SqlWriter: SqlWriter;

    const NAME: &'static str;

    fn sql_writer(&self) -> Self::SqlWriter;

    /// Translator with default configuration for this dialect.
    fn translator(&self) -> Translator<Self::SqlWriter> {
        Translator::new(self.sql_writer())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDriver {}

impl GenericDriver {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Driver for GenericDriver {
    type SqlWriter = GenericSqlWriter;

    const NAME: &'static str = "generic";
    fn sql_writer(&self) -> GenericSqlWriter {
        GenericSqlWriter::new()
    }
}
