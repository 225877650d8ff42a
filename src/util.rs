use std::env::VarError;

use anyhow::{bail, Result};

/// Get an env var as a String; decoding failures are reported as
/// errors.
pub fn getenv(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(s) => Ok(Some(s)),
        Err(e) => match e {
            VarError::NotPresent => Ok(None),
            VarError::NotUnicode(_) => bail!("{name:?} env var is not unicode"),
        }
    }
}

/// Like `getenv`, but falls back to `fallbackvalue`, and reports an
/// error if the var is missing and there is no fallback.
pub fn getenv_or(name: &str, fallbackvalue: Option<&str>) -> Result<String> {
    match getenv(name)? {
        Some(s) => Ok(s),
        None => match fallbackvalue {
            Some(v) => Ok(v.to_string()),
            None => bail!("{name:?} env var is missing and \
                           no default provided"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_getenv_or() {
        let name = "XBUCKET_VIEWS_TEST_SURELY_UNSET_VAR";
        assert_eq!(getenv(name).unwrap(), None);
        assert_eq!(getenv_or(name, Some("x")).unwrap(), "x");
        assert!(getenv_or(name, None).is_err());
    }
}
