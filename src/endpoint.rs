//! The fixed REST endpoint table.
//!
//! Four WordPress REST routes feed the include builder, each mapping to
//! exactly one template and one output file. The table is static and
//! immutable for the run; the orchestrator processes it in order.

use std::fmt;

/// Shape of the JSON payload an endpoint returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Array of menu items with `ID`, `title`, and `url` fields
    Menu,
    /// Object mapping asset handles to URLs
    AssetMap,
}

/// One REST endpoint and the include file it produces
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// Short name used in logs and debug listings
    pub name: &'static str,
    /// REST route, relative to the site base URL
    pub route: &'static str,
    /// Payload shape the route returns
    pub payload: PayloadKind,
    /// Tera template rendering this payload
    pub template: &'static str,
    /// File name written under the output directory
    pub output_file: &'static str,
}

impl Endpoint {
    /// Compose the full request URL for this endpoint
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.route)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The four endpoints, in processing order
pub const ENDPOINTS: [Endpoint; 4] = [
    Endpoint {
        name: "nav-header",
        route: "/wp-json/ccnavigation-header/menu",
        payload: PayloadKind::Menu,
        template: "site-header.html",
        output_file: "site-header.html",
    },
    Endpoint {
        name: "nav-footer",
        route: "/wp-json/ccnavigation-footer/menu",
        payload: PayloadKind::Menu,
        template: "site-footer.html",
        output_file: "site-footer.html",
    },
    Endpoint {
        name: "scripts",
        route: "/wp-json/cc-wpscripts/get",
        payload: PayloadKind::AssetMap,
        template: "footer-scripts.html",
        output_file: "footer-scripts.html",
    },
    Endpoint {
        name: "styles",
        route: "/wp-json/cc-wpstyles/get",
        payload: PayloadKind::AssetMap,
        template: "html-head.html",
        output_file: "html-head.html",
    },
];
