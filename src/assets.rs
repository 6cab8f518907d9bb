//! Embedded static assets
//!
//! The control panel page and its fixed set of scripts/stylesheets,
//! compiled into the binary from `ui/`. Each asset carries a statically
//! assigned content type; paths outside this set get the router's
//! default 404.

pub const INDEX_HTML: &str = include_str!("../ui/index.html");
pub const INDEX_JS: &str = include_str!("../ui/index.js");
pub const BOOTSTRAP_CSS: &str = include_str!("../ui/bootstrap.min.css");
pub const BOOTSTRAP_JS: &str = include_str!("../ui/bootstrap.min.js");
pub const JQUERY_SLIM_JS: &str = include_str!("../ui/jquery-3.3.1.slim.min.js");
pub const POPPER_JS: &str = include_str!("../ui/popper.min.js");

pub const CONTENT_TYPE_CSS: &str = "text/css";
pub const CONTENT_TYPE_JS: &str = "text/javascript";
