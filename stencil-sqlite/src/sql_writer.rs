use stencil_core::SqlWriter;

#[derive(Debug, Default, Clone, Copy)]
pub struct SQLiteSqlWriter {}

impl SQLiteSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for SQLiteSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push(['0', '1'][value as usize]);
    }

    fn write_value_infinity(&self, out: &mut String, negative: bool) {
        if negative {
            out.push('-');
        }
        out.push_str("1.0e+10000");
    }

    fn write_value_nan(&self, out: &mut String) {
        // Stored as NULL anyway
        self.write_value_none(out);
    }
}
