use stencil_core::SqlWriter;

#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresSqlWriter {}

impl PostgresSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for PostgresSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    /// Standard conforming string, switching to the `E'...'` form when backslashes appear.
    fn write_value_string(&self, out: &mut String, value: &str) {
        if !value.contains('\\') {
            out.push('\'');
            self.write_escaped(out, value, '\'', "''");
            out.push('\'');
            return;
        }
        out.push_str("E'");
        let mut position = 0;
        for (i, c) in value.char_indices() {
            let replace = match c {
                '\\' => "\\\\",
                '\'' => "''",
                _ => continue,
            };
            out.push_str(&value[position..i]);
            out.push_str(replace);
            position = i + 1;
        }
        out.push_str(&value[position..]);
        out.push('\'');
    }

    /// Bytea in hex format.
    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("'\\x");
        out.push_str(&hex::encode(value));
        out.push('\'');
    }

    fn write_value_infinity(&self, out: &mut String, negative: bool) {
        out.push_str(if negative {
            "'-Infinity'::FLOAT8"
        } else {
            "'Infinity'::FLOAT8"
        });
    }

    fn write_value_nan(&self, out: &mut String) {
        out.push_str("'NaN'::FLOAT8");
    }
}
