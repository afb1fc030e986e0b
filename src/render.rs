//! Tera-based rendering of include fragments.
//!
//! Each endpoint's payload is first normalized into a typed shape (menu
//! items or an asset map), which is where missing or mistyped fields from
//! the upstream API surface as render errors. Normalized data is then
//! substituted into the endpoint's template. URLs pointing at the
//! configured site have the base URL stripped so the includes stay
//! host-relative.

// Internal imports (std, crate)
use std::collections::BTreeMap;

use crate::endpoint::{Endpoint, PayloadKind};
use crate::error::{Error, Result};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tera::Tera;

/// One WordPress navigation menu entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename(deserialize = "ID"))]
    pub id: u64,
    pub title: String,
    pub url: String,
}

/// Asset handles mapped to their URLs, ordered by handle
pub type AssetMap = BTreeMap<String, String>;

/// Renders endpoint payloads through the built-in templates
pub struct IncludeRenderer {
    tera: Tera,
}

impl IncludeRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("site-header.html", include_str!("../templates/site-header.html")),
            ("site-footer.html", include_str!("../templates/site-footer.html")),
            (
                "footer-scripts.html",
                include_str!("../templates/footer-scripts.html"),
            ),
            ("html-head.html", include_str!("../templates/html-head.html")),
        ])
        .map_err(|e| Error::render(format!("failed to register templates: {e}")))?;

        Ok(Self { tera })
    }

    /// Normalize the payload and render the endpoint's template.
    ///
    /// The rendered fragment is trimmed; the writer appends the trailing
    /// newline. Rendering happens entirely in memory, so a failure here
    /// never leaves a partial include file behind.
    pub fn render(
        &self,
        endpoint: &Endpoint,
        base_url: &str,
        payload: &serde_json::Value,
    ) -> Result<String> {
        let data = match endpoint.payload {
            PayloadKind::Menu => serde_json::to_value(normalize_menu(endpoint, base_url, payload)?)?,
            PayloadKind::AssetMap => {
                serde_json::to_value(normalize_assets(endpoint, base_url, payload)?)?
            }
        };

        let mut context = tera::Context::new();
        context.insert("data", &data);

        let rendered = self
            .tera
            .render(endpoint.template, &context)
            .map_err(|e| Error::render(format!("template '{}' failed: {e}", endpoint.template)))?;

        Ok(rendered.trim().to_string())
    }
}

/// Validate a menu payload and strip the site prefix from item URLs
pub(crate) fn normalize_menu(
    endpoint: &Endpoint,
    base_url: &str,
    payload: &serde_json::Value,
) -> Result<Vec<MenuItem>> {
    let mut items: Vec<MenuItem> = serde_json::from_value(payload.clone()).map_err(|e| {
        Error::render(format!("invalid menu payload for '{}': {e}", endpoint.name))
    })?;
    for item in &mut items {
        item.url = strip_site_prefix(&item.url, base_url);
    }
    Ok(items)
}

/// Validate an asset payload and strip the site prefix from URLs
pub(crate) fn normalize_assets(
    endpoint: &Endpoint,
    base_url: &str,
    payload: &serde_json::Value,
) -> Result<AssetMap> {
    let assets: AssetMap = serde_json::from_value(payload.clone()).map_err(|e| {
        Error::render(format!("invalid asset payload for '{}': {e}", endpoint.name))
    })?;
    Ok(assets
        .into_iter()
        .map(|(handle, url)| {
            let url = strip_site_prefix(&url, base_url);
            (handle, url)
        })
        .collect())
}

/// Reduce URLs on the configured site to their path component
fn strip_site_prefix(url: &str, base_url: &str) -> String {
    url.strip_prefix(base_url).unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::ENDPOINTS;
    use serde_json::json;

    const BASE: &str = "https://creativecommons.org";

    fn menu_endpoint() -> &'static Endpoint {
        &ENDPOINTS[0]
    }

    fn styles_endpoint() -> &'static Endpoint {
        &ENDPOINTS[3]
    }

    #[test]
    fn test_render_menu() {
        let renderer = IncludeRenderer::new().unwrap();
        let payload = json!([
            {"ID": 101, "title": "About", "url": "https://creativecommons.org/about/"},
            {"ID": 102, "title": "Licenses", "url": "/licenses/"},
        ]);

        let rendered = renderer.render(menu_endpoint(), BASE, &payload).unwrap();

        assert_eq!(
            rendered,
            "<nav id=\"site-navigation\" class=\"main-navigation\" aria-label=\"Main menu\">\n\
             \x20 <ul class=\"menu\">\n\
             \x20   <li id=\"menu-item-101\" class=\"menu-item\"><a href=\"/about/\">About</a></li>\n\
             \x20   <li id=\"menu-item-102\" class=\"menu-item\"><a href=\"/licenses/\">Licenses</a></li>\n\
             \x20 </ul>\n\
             </nav>"
        );
    }

    #[test]
    fn test_render_menu_escapes_html() {
        let renderer = IncludeRenderer::new().unwrap();
        let payload = json!([
            {"ID": 1, "title": "Terms & Conditions", "url": "/terms/"},
        ]);

        let rendered = renderer.render(menu_endpoint(), BASE, &payload).unwrap();
        assert!(rendered.contains("Terms &amp; Conditions"));
    }

    #[test]
    fn test_render_menu_missing_field() {
        let renderer = IncludeRenderer::new().unwrap();
        let payload = json!([{"ID": 1, "url": "/about/"}]);

        let result = renderer.render(menu_endpoint(), BASE, &payload);
        match result.unwrap_err() {
            Error::Render(msg) => {
                assert!(msg.contains("nav-header"));
                assert!(msg.contains("title"));
            }
            other => panic!("Expected Render error, got {other:?}"),
        }
    }

    #[test]
    fn test_render_styles() {
        let renderer = IncludeRenderer::new().unwrap();
        let payload = json!({
            "cc-global": "https://creativecommons.org/wp-content/themes/cc/style.css?ver=1.2",
            "bootstrap": "https://cdn.example.org/bootstrap.min.css",
        });

        let rendered = renderer.render(styles_endpoint(), BASE, &payload).unwrap();

        assert_eq!(
            rendered,
            "<link rel=\"stylesheet\" id=\"bootstrap-css\" href=\"https://cdn.example.org/bootstrap.min.css\" media=\"all\">\n\
             <link rel=\"stylesheet\" id=\"cc-global-css\" href=\"/wp-content/themes/cc/style.css?ver=1.2\" media=\"all\">"
        );
    }

    #[test]
    fn test_render_assets_rejects_non_string_values() {
        let renderer = IncludeRenderer::new().unwrap();
        let payload = json!({"cc-global": 42});

        let result = renderer.render(styles_endpoint(), BASE, &payload);
        assert!(matches!(result.unwrap_err(), Error::Render(_)));
    }

    #[test]
    fn test_strip_site_prefix() {
        assert_eq!(
            strip_site_prefix("https://creativecommons.org/about/", BASE),
            "/about/"
        );
        assert_eq!(
            strip_site_prefix("https://other.example.org/x", BASE),
            "https://other.example.org/x"
        );
        assert_eq!(strip_site_prefix("/already/relative", BASE), "/already/relative");
    }

    #[test]
    fn test_render_twice_is_identical() {
        let renderer = IncludeRenderer::new().unwrap();
        let payload = json!([
            {"ID": 7, "title": "About", "url": "/about/"},
        ]);

        let first = renderer.render(menu_endpoint(), BASE, &payload).unwrap();
        let second = renderer.render(menu_endpoint(), BASE, &payload).unwrap();
        assert_eq!(first, second);
    }
}
