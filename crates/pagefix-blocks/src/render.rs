//! Rendering the canonical block to markup

use crate::canonical::CanonicalBlock;
use crate::locator::{BLOCK_ID, FINGERPRINT_CLASSES, MARKER_ATTRIBUTE, VERSION_ATTRIBUTE};

/// The canonical block rendered once per run and reused for every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    version: String,
    marker_version: String,
    html: String,
}

impl RenderedBlock {
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The version exactly as written into `data-block-version`.
    pub fn marker_version(&self) -> &str {
        &self.marker_version
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Render a block to Tailwind-styled markup.
///
/// The outermost `div` carries both the Type A fingerprint classes and the
/// `data-block`/`data-block-version` marker, so later runs recognize it.
/// Content fields are trusted markup and are emitted verbatim.
pub fn render(block: &CanonicalBlock) -> RenderedBlock {
    let c = &block.content;

    let feature_cards: String = c
        .features
        .iter()
        .map(|feature| {
            format!(
                r#"
        <div class="bg-white rounded-xl p-6 shadow-sm">
          <h3 class="text-lg font-semibold text-gray-900 mb-2">{}</h3>
          <p class="text-gray-600">{}</p>
        </div>"#,
                feature.title, feature.description
            )
        })
        .collect();

    let description = c.description_paragraphs.join("\n\n");
    let marker_version = escape_attribute(&block.version);

    let html = format!(
        r#"<div class="{classes}" {marker}="{id}" {version_attr}="{version}">
    <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
      <h2 class="text-3xl sm:text-4xl font-bold text-gray-900 mb-6 text-center">
        {heading}
      </h2>

      <div class="text-lg text-gray-700 mb-8 text-center max-w-3xl mx-auto">
        {intro}
      </div>

      <div class="prose prose-lg max-w-none text-gray-700 mb-12">
        {description}
      </div>

      <div class="grid md:grid-cols-2 gap-6 mb-12">{feature_cards}
      </div>

      <div class="text-center">
        <a href="{cta_url}" class="inline-flex items-center bg-primary hover:bg-primary-dark text-white px-8 py-3.5 rounded-lg font-semibold text-lg transition shadow-lg shadow-primary/25">
          {cta_text}
          <svg class="w-5 h-5 ml-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 7l5 5m0 0l-5 5m5-5H6"></path>
          </svg>
        </a>
      </div>
    </div>
  </div>"#,
        classes = FINGERPRINT_CLASSES.join(" "),
        marker = MARKER_ATTRIBUTE,
        id = BLOCK_ID,
        version_attr = VERSION_ATTRIBUTE,
        version = marker_version,
        heading = c.heading,
        intro = c.intro,
        cta_url = c.cta_url,
        cta_text = c.cta_text,
    );

    RenderedBlock {
        version: block.version.clone(),
        marker_version,
        html,
    }
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
