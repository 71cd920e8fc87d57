use stencil_core::SqlWriter;

#[derive(Debug, Default, Clone, Copy)]
pub struct MySQLSqlWriter {}

impl MySQLSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for MySQLSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn write_identifier_part(&self, out: &mut String, value: &str) {
        out.push('`');
        self.write_escaped(out, value, '`', "``");
        out.push('`');
    }

    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push(['0', '1'][value as usize]);
    }

    /// Backslash escaping, same set as `mysql_real_escape_string`.
    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        let mut position = 0;
        for (i, c) in value.char_indices() {
            let replace = match c {
                '\0' => "\\0",
                '\n' => "\\n",
                '\r' => "\\r",
                '\\' => "\\\\",
                '\'' => "\\'",
                '"' => "\\\"",
                '\x1a' => "\\Z",
                _ => continue,
            };
            out.push_str(&value[position..i]);
            out.push_str(replace);
            position = i + 1;
        }
        out.push_str(&value[position..]);
        out.push('\'');
    }

    fn write_value_infinity(&self, out: &mut String, negative: bool) {
        log::warn!(
            "MySQL does not support {}infinity, writing NULL",
            if negative { "negative " } else { "" }
        );
        self.write_value_none(out);
    }

    fn write_value_nan(&self, out: &mut String) {
        log::warn!("MySQL does not support NaN, writing NULL");
        self.write_value_none(out);
    }
}
