//! CMS image URL builder.
//!
//! Gallery and cover images live on the CMS asset CDN. An asset reference
//! looks like `image-<assetId>-<width>x<height>-<format>`; the CDN URL is
//! `https://cdn.sanity.io/images/<project>/<dataset>/<assetId>-<WxH>.<fmt>`
//! plus optional resize/quality/format query parameters.

use std::sync::OnceLock;

use regex::Regex;

use crate::client::CmsError;

/// Image CDN host.
const IMAGE_CDN_HOST: &str = "cdn.sanity.io";

fn asset_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^image-([A-Za-z0-9]+)-(\d+x\d+)-([a-z0-9]+)$").unwrap()
    })
}

/// Optional transformations applied by the image CDN.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageOptions {
    /// Target width in pixels.
    pub width: Option<u32>,
    /// Target height in pixels.
    pub height: Option<u32>,
    /// JPEG/WebP quality, 0-100.
    pub quality: Option<u8>,
    /// Output format override (`webp`, `jpg`, `png`).
    pub format: Option<&'static str>,
}

/// Builds CDN URLs for image asset references of one project/dataset.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    /// Create a builder for the given project and dataset.
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// Resolve an asset reference to a plain CDN URL.
    pub fn url(&self, asset_ref: &str) -> Result<String, CmsError> {
        self.url_with(asset_ref, ImageOptions::default())
    }

    /// Resolve an asset reference to a CDN URL with transformations.
    pub fn url_with(&self, asset_ref: &str, options: ImageOptions) -> Result<String, CmsError> {
        let captures = asset_ref_pattern()
            .captures(asset_ref)
            .ok_or_else(|| CmsError::InvalidAssetRef(asset_ref.to_string()))?;

        let asset_id = &captures[1];
        let dimensions = &captures[2];
        let format = &captures[3];

        let mut url = format!(
            "https://{IMAGE_CDN_HOST}/images/{}/{}/{asset_id}-{dimensions}.{format}",
            self.project_id, self.dataset
        );

        let mut params: Vec<String> = Vec::new();
        if let Some(w) = options.width {
            params.push(format!("w={w}"));
        }
        if let Some(h) = options.height {
            params.push(format!("h={h}"));
        }
        if let Some(q) = options.quality {
            params.push(format!("q={q}"));
        }
        if let Some(f) = options.format {
            params.push(format!("fm={f}"));
        }
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }

        Ok(url)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
