use std::borrow::Cow;

use crate::config::AppConfig;

pub mod landing;
pub mod layout;
pub mod styles;

/// Escapes text for HTML element content and quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// The landing page never changes for a given configuration, so it is
/// rendered once at startup.
pub fn render_landing_page(config: &AppConfig) -> String {
    layout::render_document(config, &landing::render_landing())
}
