/// Environment variable holding the author recorded in generated headers.
pub const AUTHOR_VARIABLE: &str = "GIT_AUTHOR_NAME";

/// Value of `GIT_AUTHOR_NAME`, or an empty string when it is not set.
///
/// A set-but-empty variable is returned as is. Non UTF-8 values are
/// converted lossily.
pub fn author_name() -> String {
    match std::env::var_os(AUTHOR_VARIABLE) {
        Some(value) => value.to_string_lossy().into_owned(),
        None => {
            tracing::debug!("{} is not set", AUTHOR_VARIABLE);
            String::new()
        }
    }
}

