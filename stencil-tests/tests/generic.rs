#[cfg(test)]
mod tests {
    use stencil::GenericDriver;
    use stencil_tests::{execute_tests, init_logs};

    #[test]
    fn common_suite() {
        init_logs();
        execute_tests(&GenericDriver::new());
    }
}
