//! The HTML pages of the xbucket server: the index page with the API
//! documentation, the login pages and the error page, written with
//! the `shtml` templating library.

pub mod util;
pub mod config;
pub mod http_method;
pub mod route;
pub mod docs;
pub mod style;
pub mod views;
