mod conditionals;
mod errors;
mod mappings;
mod modifiers;
mod plain;
mod substitutions;

use crate::{
    conditionals::conditionals, errors::errors, mappings::mappings, modifiers::modifiers,
    plain::plain, substitutions::substitutions,
};
use log::LevelFilter;
use std::env;
use stencil::{Driver, SqlWriter, Translator};

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Run the dialect agnostic suite, expectations are built with the dialect own writer.
pub fn execute_tests<D: Driver>(driver: &D) {
    let translator = driver.translator();
    plain(&translator);
    conditionals(&translator);
    mappings(&translator);
    modifiers(&translator);
    silent_logs! {
        errors(&translator);
    }
    substitutions(driver);
}

/// String literal as the dialect writes it.
pub fn string<W: SqlWriter>(translator: &Translator<W>, value: &str) -> String {
    let mut out = String::new();
    translator.writer().write_value_string(&mut out, value);
    out
}

/// Quoted identifier as the dialect writes it.
pub fn ident<W: SqlWriter>(translator: &Translator<W>, value: &str) -> String {
    let mut out = String::new();
    translator.writer().write_identifier_quoted(&mut out, value);
    out
}

/// Boolean literal as the dialect writes it.
pub fn boolean<W: SqlWriter>(translator: &Translator<W>, value: bool) -> String {
    let mut out = String::new();
    translator.writer().write_value_bool(&mut out, value);
    out
}
