//! Loose boolean coercion for environment variables and JSON values.
//!
//! Only `true` itself and strings equal to `"true"` after trimming and
//! lowercasing count as true. Everything else is false.

/// Values that can be read as a strict boolean flag.
pub trait EnvBool {
    fn env_bool(&self) -> bool;
}

impl EnvBool for bool {
    fn env_bool(&self) -> bool {
        *self
    }
}

impl EnvBool for str {
    fn env_bool(&self) -> bool {
        self.trim().to_lowercase() == "true"
    }
}

impl EnvBool for String {
    fn env_bool(&self) -> bool {
        self.as_str().env_bool()
    }
}

impl<T: EnvBool + ?Sized> EnvBool for &T {
    fn env_bool(&self) -> bool {
        (**self).env_bool()
    }
}

impl<T: EnvBool> EnvBool for Option<T> {
    fn env_bool(&self) -> bool {
        self.as_ref().is_some_and(EnvBool::env_bool)
    }
}

impl EnvBool for serde_json::Value {
    fn env_bool(&self) -> bool {
        match self {
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::String(s) => s.env_bool(),
            _ => false,
        }
    }
}

pub fn env_var_to_bool<T: EnvBool + ?Sized>(value: &T) -> bool {
    value.env_bool()
}

/// Reads `name` from the process environment. Unset or non-unicode is false.
pub fn env_flag(name: &str) -> bool {
    env_flag_with(name, |key| std::env::var(key).ok())
}

/// Like [`env_flag`], with variables resolved through `lookup`.
pub fn env_flag_with<F>(name: &str, lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).env_bool()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn true_strings_in_any_case_and_padding() {
        for s in ["true", "True", "TRUE", " true", "true\n", "\t TrUe  "] {
            assert!(env_var_to_bool(s), "{s:?} should be true");
        }
    }

    #[test]
    fn other_strings_are_false() {
        for s in [
            "", "false", "1", "yes", "on", "t", "truex", "tr ue", "\"true\"",
        ] {
            assert!(!env_var_to_bool(s), "{s:?} should be false");
        }
    }

    #[test]
    fn booleans_pass_through() {
        assert!(env_var_to_bool(&true));
        assert!(!env_var_to_bool(&false));
    }

    #[test]
    fn non_string_json_values_are_false() {
        for value in [
            json!(null),
            json!(1),
            json!(0),
            json!(1.5),
            json!([]),
            json!(["true"]),
            json!({"a": true}),
        ] {
            assert!(!env_var_to_bool(&value), "{value} should be false");
        }
    }

    #[test]
    fn json_strings_and_bools_follow_the_string_rule() {
        assert!(env_var_to_bool(&json!(true)));
        assert!(env_var_to_bool(&json!(" TRUE ")));
        assert!(!env_var_to_bool(&json!(false)));
        assert!(!env_var_to_bool(&json!("false")));
    }

    #[test]
    fn option_none_is_false() {
        let none: Option<String> = None;
        assert!(!env_var_to_bool(&none));
        assert!(env_var_to_bool(&Some("true".to_string())));
    }

    #[test]
    fn unset_env_flag_is_false() {
        assert!(!env_flag("BOTPERMS_TEST_SURELY_UNSET_VARIABLE"));
    }

    #[test]
    fn env_flag_with_reads_set_values() {
        let lookup =
            |value: &'static str| move |key: &str| (key == "FLAG").then(|| value.to_string());

        assert!(env_flag_with("FLAG", lookup(" TrUe ")));
        assert!(env_flag_with("FLAG", lookup("true")));
        assert!(!env_flag_with("FLAG", lookup("1")));
        assert!(!env_flag_with("FLAG", lookup("")));
        assert!(!env_flag_with("OTHER", lookup("true")));
    }
}
