#[cfg(test)]
mod tests {
    use std::future::Future;
    use stencil::{
        Driver, ErrorPolicy, Executor, GenericDriver, Result, RowsAffected, TranslationFailed,
        TranslatorConfig, args, future,
    };

    #[derive(Default)]
    struct RecordingExecutor {
        driver: GenericDriver,
        sent: Vec<String>,
    }

    impl Executor for RecordingExecutor {
        type Driver = GenericDriver;

        fn driver(&self) -> &GenericDriver {
            &self.driver
        }

        fn run(&mut self, sql: String) -> impl Future<Output = Result<RowsAffected>> + Send {
            self.sent.push(sql);
            future::ready(Ok(RowsAffected {
                rows_affected: 1,
                last_insert_id: Some(self.sent.len() as i64),
            }))
        }
    }

    #[tokio::test]
    async fn execute_sends_translated_sql() {
        let mut executor = RecordingExecutor::default();
        let translator = executor.driver().translator();
        let result = executor
            .execute(&translator, &args!["DELETE FROM t WHERE id = %i", "3"])
            .await
            .expect("Could not execute");
        assert_eq!(
            result,
            RowsAffected {
                rows_affected: 1,
                last_insert_id: Some(1),
            }
        );
        assert_eq!(executor.sent, ["DELETE FROM t WHERE id = 3"]);
    }

    #[tokio::test]
    async fn failed_translation_is_not_sent() {
        let mut executor = RecordingExecutor::default();
        let translator = executor.driver().translator();
        let error = executor
            .execute(&translator, &args!["DELETE FROM t WHERE id = 'x"])
            .await
            .expect_err("Should not translate");
        assert!(error.downcast_ref::<TranslationFailed>().is_some());
        assert!(executor.sent.is_empty());

        let mut translator = translator;
        *translator.config_mut() = TranslatorConfig::default().with_error_policy(ErrorPolicy::Empty);
        let result = executor
            .execute(&translator, &args!["DELETE FROM t WHERE id = 'x"])
            .await
            .expect("Empty policy should not fail");
        assert_eq!(result, RowsAffected::default());
        assert!(executor.sent.is_empty());
    }
}
