//! Reading settings from environment variables.

use std::{env, fmt::Display, str::FromStr};

use anyhow::{anyhow, bail, Result};

/// `None` if the variable is not set, an error if it is not unicode or
/// does not parse.
pub fn opt_get_env<T: FromStr>(varname: &str) -> Result<Option<T>>
    where T::Err: Display
{
    match env::var(varname) {
        Ok(s) => {
            Ok(Some(s.parse().map_err(
                |e| anyhow!("could not parse {varname:?} env var with contents {s:?}: {e}"))?))
        },
        Err(e) => match e {
            env::VarError::NotPresent => Ok(None),
            env::VarError::NotUnicode(_) => bail!("could not decode {varname:?} env var: {e}")
        }
    }
}

pub fn parse_bool(s: &str) -> Result<bool> {
    match s.trim() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("not a boolean: {s:?}")
    }
}

/// A missing variable counts as `default`.
pub fn get_env_bool_or(varname: &str, default: bool) -> Result<bool> {
    match opt_get_env::<String>(varname)? {
        Some(s) => parse_bool(&s).map_err(
            |e| anyhow!("could not parse {varname:?} env var: {e}")),
        None => Ok(default)
    }
}

pub fn get_env_bool(varname: &str) -> Result<bool> {
    get_env_bool_or(varname, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_parse_bool() {
        assert!(parse_bool("1").unwrap());
        assert!(parse_bool("true").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(!parse_bool("").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn t_missing_var() {
        let name = "SHTML_HTML_TEST_SURELY_UNSET_VAR";
        assert_eq!(opt_get_env::<String>(name).unwrap(), None);
        assert!(get_env_bool_or(name, true).unwrap());
        assert!(!get_env_bool(name).unwrap());
    }
}
