/// [`assert`]s that the result is an error with the given message.
#[track_caller]
pub fn assert_error_message<T>(result: anyhow::Result<T>, message: &str) {
    assert!(result.is_err_and(|err| format!("{err:#}") == message))
}

/// [`assert`]s that the result is an error that contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: anyhow::Result<T>, message: &str) {
    assert!(result.is_err_and(|err| format!("{err:#}").contains(message)))
}
