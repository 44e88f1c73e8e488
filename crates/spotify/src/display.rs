//! Presentation helpers for catalog data.

use crate::types::Image;

/// Embeddable catalog entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedType {
    Track,
    Album,
    Artist,
    Playlist,
}

impl EmbedType {
    fn as_str(self) -> &'static str {
        match self {
            EmbedType::Track => "track",
            EmbedType::Album => "album",
            EmbedType::Artist => "artist",
            EmbedType::Playlist => "playlist",
        }
    }
}

/// Player theme for the embed widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedTheme {
    #[default]
    Dark,
    Light,
}

/// Preferred size when picking one image out of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferredSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Format a duration in milliseconds as `m:ss`.
pub fn format_duration(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{minutes}:{seconds:02}")
}

/// Build the public embed-player URL for a catalog entity.
pub fn embed_url(kind: EmbedType, id: &str, theme: EmbedTheme) -> String {
    let theme = match theme {
        EmbedTheme::Light => "1",
        EmbedTheme::Dark => "0",
    };
    format!(
        "https://open.spotify.com/embed/{}/{id}?utm_source=generator&theme={theme}",
        kind.as_str()
    )
}

/// Pick the best image URL from a set for the preferred display size.
///
/// Images are ranked by width: `Large` takes the widest, `Small` the
/// narrowest, `Medium` the middle of the sorted set.
pub fn best_image(images: &[Image], preferred: PreferredSize) -> Option<&str> {
    if images.is_empty() {
        return None;
    }

    let mut sorted: Vec<&Image> = images.iter().collect();
    sorted.sort_by(|a, b| b.width.cmp(&a.width));

    let picked = match preferred {
        PreferredSize::Large => sorted[0],
        PreferredSize::Small => sorted[sorted.len() - 1],
        PreferredSize::Medium => sorted[sorted.len() / 2],
    };
    Some(picked.url.as_str())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn image(url: &str, width: u32) -> Image {
        Image {
            url: url.to_string(),
            height: width,
            width,
        }
    }

    #[test]
    fn format_duration_pads_seconds() {
        assert_eq!(format_duration(225_000), "3:45");
        assert_eq!(format_duration(62_000), "1:02");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(600_000), "10:00");
    }

    #[test]
    fn embed_url_encodes_kind_and_theme() {
        assert_eq!(
            embed_url(EmbedType::Album, "a1", EmbedTheme::Dark),
            "https://open.spotify.com/embed/album/a1?utm_source=generator&theme=0"
        );
        assert_eq!(
            embed_url(EmbedType::Track, "t1", EmbedTheme::Light),
            "https://open.spotify.com/embed/track/t1?utm_source=generator&theme=1"
        );
    }

    #[test]
    fn best_image_picks_by_preferred_size() {
        let images = vec![image("small", 64), image("large", 640), image("medium", 300)];
        assert_eq!(best_image(&images, PreferredSize::Large), Some("large"));
        assert_eq!(best_image(&images, PreferredSize::Small), Some("small"));
        assert_eq!(best_image(&images, PreferredSize::Medium), Some("medium"));
    }

    #[test]
    fn best_image_empty_set_is_none() {
        assert_eq!(best_image(&[], PreferredSize::Medium), None);
    }
}
