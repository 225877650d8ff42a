use anyhow::Result;
use shtml_html::env::get_env_bool_or;

use crate::util::getenv_or;

pub const DEFAULT_SERVER_NAME: &str = "xbucket server";
pub const DEFAULT_AUTHOR: &str = "Rene Muala";

/// Settings of the pages, read from `XBUCKET_SERVER_NAME`,
/// `XBUCKET_AUTHOR` and `XBUCKET_HTMX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub server_name: String,
    pub author: String,
    /// Whether pages that use htmx get the library injected.
    pub htmx: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            server_name: DEFAULT_SERVER_NAME.into(),
            author: DEFAULT_AUTHOR.into(),
            htmx: true,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<SiteConfig> {
        Ok(SiteConfig {
            server_name: getenv_or("XBUCKET_SERVER_NAME", Some(DEFAULT_SERVER_NAME))?,
            author: getenv_or("XBUCKET_AUTHOR", Some(DEFAULT_AUTHOR))?,
            htmx: get_env_bool_or("XBUCKET_HTMX", true)?,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // One test: the variables are process global.
    #[test]
    fn t_from_env_defaults() {
        for name in ["XBUCKET_SERVER_NAME", "XBUCKET_AUTHOR", "XBUCKET_HTMX"] {
            std::env::remove_var(name);
        }
        let config = SiteConfig::from_env().unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.server_name, "xbucket server");
        assert_eq!(config.author, "Rene Muala");
        assert!(config.htmx);

        std::env::set_var("XBUCKET_HTMX", "off");
        std::env::set_var("XBUCKET_SERVER_NAME", "bucket one");
        let config = SiteConfig::from_env().unwrap();
        assert!(!config.htmx);
        assert_eq!(config.server_name, "bucket one");

        std::env::set_var("XBUCKET_HTMX", "maybe");
        let e = SiteConfig::from_env().unwrap_err();
        assert!(e.to_string().contains("XBUCKET_HTMX"));

        for name in ["XBUCKET_SERVER_NAME", "XBUCKET_HTMX"] {
            std::env::remove_var(name);
        }
    }
}
