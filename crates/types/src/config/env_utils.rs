use std::{borrow::Cow, env};

/// Load a variable from the environment
pub fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|val| !val.is_empty())
}

/// Load a variable from the environment, falling back to a placeholder
/// default when it is unset or empty.
pub fn load_string_or(key: &str, default: &'static str) -> Cow<'static, str> {
    load_string_opt(key).map(Cow::Owned).unwrap_or(Cow::Borrowed(default))
}
