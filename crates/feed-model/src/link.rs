//! # Links and the Link Validator
//!
//! A [`Link`] declares what it points at through its `linkType`, and its URL
//! must have the shape that type implies. JSON Schema cannot express that
//! (the URL grammar depends on another field's value), so the rule lives
//! here as code and runs after schema validation in both directions.
//!
//! ## Rules
//!
//! The check is a dispatch table from [`LinkType`] to a matcher function:
//!
//! | Link type | URL must be |
//! |-----------|-------------|
//! | `YOUTUBE_VIDEO` | a `youtube.com/watch?v=<id>`, `youtube.com/embed/<id>` or `youtu.be/<id>` URL |
//! | `PNG_IMAGE` | a URL whose last path segment ends in `.png` |
//! | `SVG_IMAGE` | ... `.svg` |
//! | `PDF_DOCUMENT` | ... `.pdf` |
//! | `MP4` | ... `.mp4` |
//! | `DEFAULT` | any web URL |
//!
//! Every rule first requires a non-empty, absolute `http`/`https` URL.
//! Extensions compare case-insensitively. Matching is purely syntactic: no
//! URL is ever fetched.

use feed_core::LinkType;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::element::Element;
use crate::error::FeedError;

/// Logo used as the default icon of generated feed content.
pub const LOGO_URL: &str = "https://assets.feedlib.dev/images/logo.png";

/// A 1x1 transparent image, used where a thumbnail is required but none exists.
pub const BLANK_IMAGE_URL: &str = "https://assets.feedlib.dev/images/1px.png";

/// A video URL that satisfies the `YOUTUBE_VIDEO` rule.
pub const SAMPLE_VIDEO_URL: &str = "https://www.youtube.com/watch?v=bPiofmZGb8o";

/// Why a link's URL was rejected for its declared type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The URL is empty.
    #[error("link URL is empty")]
    EmptyUrl,

    /// The link carries no link type.
    #[error("link has no link type")]
    MissingLinkType,

    /// The link type tag is not a known [`LinkType`].
    #[error("{0} is not a valid LinkType")]
    UnknownLinkType(String),

    /// The URL is not an absolute http(s) URL.
    #[error("{url} is not a valid URL: {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it did not parse.
        reason: String,
    },

    /// The URL is well formed but does not have the shape its type requires.
    #[error("{url} is not a valid {link_type} URL")]
    Mismatch {
        /// The declared link type.
        link_type: LinkType,
        /// The rejected URL.
        url: String,
    },
}

type UrlMatcher = fn(&Url) -> bool;

const LINK_RULES: [(LinkType, UrlMatcher); 6] = [
    (LinkType::YoutubeVideo, is_youtube_video),
    (LinkType::PngImage, is_png),
    (LinkType::SvgImage, is_svg),
    (LinkType::PdfDocument, is_pdf),
    (LinkType::Mp4, is_mp4),
    (LinkType::Default, is_web_page),
];

const YOUTUBE_HOSTS: &[&str] = &["youtube.com", "www.youtube.com", "m.youtube.com"];
const YOUTUBE_SHORT_HOST: &str = "youtu.be";

fn matcher_for(link_type: LinkType) -> Option<UrlMatcher> {
    LINK_RULES
        .iter()
        .find(|(t, _)| *t == link_type)
        .map(|(_, matcher)| *matcher)
}

/// Check that `url` has the shape `link_type` requires.
///
/// Deterministic and side-effect free: the same inputs always give the same
/// answer.
pub fn validate_link_url(link_type: LinkType, url: &str) -> Result<(), LinkError> {
    if url.trim().is_empty() {
        return Err(LinkError::EmptyUrl);
    }
    let parsed = parse_web_url(url)?;
    let matcher =
        matcher_for(link_type).ok_or_else(|| LinkError::UnknownLinkType(link_type.to_string()))?;

    if matcher(&parsed) {
        Ok(())
    } else {
        Err(LinkError::Mismatch {
            link_type,
            url: url.to_string(),
        })
    }
}

/// Like [`validate_link_url`], for an untyped link type tag such as
/// `"PNG_IMAGE"`. Unknown tags are rejected.
pub fn validate_link_tag(link_type: &str, url: &str) -> Result<(), LinkError> {
    let link_type: LinkType = link_type
        .parse()
        .map_err(|_| LinkError::UnknownLinkType(link_type.to_string()))?;
    validate_link_url(link_type, url)
}

fn parse_web_url(url: &str) -> Result<Url, LinkError> {
    let parsed = Url::parse(url.trim()).map_err(|e| LinkError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
        scheme => Err(LinkError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {scheme:?}"),
        }),
    }
}

fn is_youtube_video(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    if host == YOUTUBE_SHORT_HOST {
        return url.path().strip_prefix('/').is_some_and(is_video_id);
    }
    if !YOUTUBE_HOSTS.contains(&host) {
        return false;
    }
    match url.path() {
        "/watch" => url
            .query_pairs()
            .any(|(key, value)| key == "v" && is_video_id(&value)),
        path => path.strip_prefix("/embed/").is_some_and(is_video_id),
    }
}

fn is_video_id(candidate: &str) -> bool {
    candidate.len() == 11
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn has_extension(url: &Url, extension: &str) -> bool {
    url.path_segments()
        .and_then(|segments| segments.last())
        .and_then(|last| last.rsplit_once('.'))
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case(extension))
}

fn is_png(url: &Url) -> bool {
    has_extension(url, "png")
}

fn is_svg(url: &Url) -> bool {
    has_extension(url, "svg")
}

fn is_pdf(url: &Url) -> bool {
    has_extension(url, "pdf")
}

fn is_mp4(url: &Url) -> bool {
    has_extension(url, "mp4")
}

fn is_web_page(_url: &Url) -> bool {
    true
}

// ---------------------------------------------------------------------------
// Link
// ---------------------------------------------------------------------------

/// A typed link: an icon, an attachment, a video.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

impl Link {
    /// Build a link with a freshly generated id.
    pub fn new(
        link_type: LinkType,
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: url.into(),
            link_type: Some(link_type),
            title: title.into(),
            description: description.into(),
            thumbnail: thumbnail.into(),
        }
    }

    /// A `PNG_IMAGE` link.
    pub fn png_image(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self::new(LinkType::PngImage, url, title, description, thumbnail)
    }

    /// A `PDF_DOCUMENT` link.
    pub fn pdf_document(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self::new(LinkType::PdfDocument, url, title, description, thumbnail)
    }

    /// A `YOUTUBE_VIDEO` link.
    pub fn youtube_video(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self::new(LinkType::YoutubeVideo, url, title, description, thumbnail)
    }

    /// Check the URL against the rule for this link's type.
    pub fn validate_url(&self) -> Result<(), LinkError> {
        let link_type = self.link_type.ok_or(LinkError::MissingLinkType)?;
        validate_link_url(link_type, &self.url)
    }
}

impl Element for Link {
    const SCHEMA_ID: &'static str = "link.schema.json";

    fn check_semantics(&self) -> Result<(), FeedError> {
        Ok(self.validate_url()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_every_link_type_has_a_rule() {
        for link_type in LinkType::all() {
            assert!(
                matcher_for(*link_type).is_some(),
                "no URL rule for {link_type}"
            );
        }
    }

    #[test]
    fn test_youtube_urls() {
        let accepted = [
            SAMPLE_VIDEO_URL,
            "https://youtube.com/watch?v=bPiofmZGb8o",
            "http://m.youtube.com/watch?feature=share&v=bPiofmZGb8o",
            "https://www.youtube.com/embed/bPiofmZGb8o",
            "https://youtu.be/bPiofmZGb8o",
            "https://WWW.YOUTUBE.COM/watch?v=bPiofmZGb8o",
        ];
        for url in accepted {
            assert_eq!(
                validate_link_url(LinkType::YoutubeVideo, url),
                Ok(()),
                "{url} should be a video URL"
            );
        }

        let rejected = [
            "https://example.com/not_a_video",
            "https://www.youtube.com/watch",
            "https://www.youtube.com/watch?v=short",
            "https://www.youtube.com/channel/bPiofmZGb8o",
            "https://notyoutube.com/watch?v=bPiofmZGb8o",
            "https://vimeo.com/123456789",
        ];
        for url in rejected {
            assert!(
                matches!(
                    validate_link_url(LinkType::YoutubeVideo, url),
                    Err(LinkError::Mismatch { .. })
                ),
                "{url} should not be a video URL"
            );
        }
    }

    #[test]
    fn test_extension_rules() {
        assert_eq!(validate_link_url(LinkType::PngImage, LOGO_URL), Ok(()));
        assert_eq!(
            validate_link_url(LinkType::PngImage, "https://example.com/a/b/Photo.PNG"),
            Ok(())
        );
        assert_eq!(
            validate_link_url(LinkType::PngImage, "https://example.com/logo.png?size=2"),
            Ok(())
        );
        assert_eq!(
            validate_link_url(LinkType::PdfDocument, "https://example.com/report.pdf"),
            Ok(())
        );
        assert_eq!(
            validate_link_url(LinkType::SvgImage, "https://example.com/icon.svg"),
            Ok(())
        );
        assert_eq!(
            validate_link_url(LinkType::Mp4, "https://cdn.example.com/intro.mp4"),
            Ok(())
        );

        // Extension of another format.
        assert!(matches!(
            validate_link_url(LinkType::PdfDocument, LOGO_URL),
            Err(LinkError::Mismatch { link_type: LinkType::PdfDocument, .. })
        ));
        // Extension on a directory, not the last segment.
        assert!(validate_link_url(LinkType::PngImage, "https://example.com/x.png/view").is_err());
        // Bare extension with no file name.
        assert!(validate_link_url(LinkType::PngImage, "https://example.com/.png").is_err());
        assert!(validate_link_url(LinkType::PngImage, "https://example.com/not_a_png").is_err());
    }

    #[test]
    fn test_default_accepts_any_web_url() {
        assert_eq!(
            validate_link_url(LinkType::Default, "https://example.com/anything"),
            Ok(())
        );
        assert!(matches!(
            validate_link_url(LinkType::Default, "ftp://example.com/file"),
            Err(LinkError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_malformed_urls() {
        for url in ["not a valid URL", "www.example.com/not_a_video", "/relative/path.png"] {
            assert!(
                matches!(
                    validate_link_url(LinkType::YoutubeVideo, url),
                    Err(LinkError::InvalidUrl { .. })
                ),
                "{url} should be rejected as malformed"
            );
        }
        assert_eq!(
            validate_link_url(LinkType::PngImage, ""),
            Err(LinkError::EmptyUrl)
        );
        assert_eq!(
            validate_link_url(LinkType::PngImage, "   "),
            Err(LinkError::EmptyUrl)
        );
    }

    #[test]
    fn test_untyped_tag() {
        assert_eq!(validate_link_tag("PNG_IMAGE", LOGO_URL), Ok(()));
        assert_eq!(
            validate_link_tag("GIF_IMAGE", LOGO_URL),
            Err(LinkError::UnknownLinkType("GIF_IMAGE".into()))
        );
    }

    #[test]
    fn test_link_without_type_fails() {
        let link = Link {
            id: "link-1".into(),
            url: LOGO_URL.into(),
            ..Link::default()
        };
        assert_eq!(link.validate_url(), Err(LinkError::MissingLinkType));
    }

    #[test]
    fn test_constructors() {
        let a = Link::png_image(LOGO_URL, "title", "description", BLANK_IMAGE_URL);
        let b = Link::png_image(LOGO_URL, "title", "description", BLANK_IMAGE_URL);
        assert_ne!(a.id, b.id);
        assert_eq!(a.link_type, Some(LinkType::PngImage));
        assert!(a.validate_url().is_ok());

        let video = Link::youtube_video(SAMPLE_VIDEO_URL, "t", "d", BLANK_IMAGE_URL);
        assert!(video.validate_url().is_ok());

        let doc = Link::pdf_document("https://example.com/a.pdf", "t", "d", BLANK_IMAGE_URL);
        assert!(doc.validate_url().is_ok());
    }

    #[test]
    fn test_wire_format() {
        let link = Link::png_image(LOGO_URL, "title", "description", BLANK_IMAGE_URL);
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["linkType"], "PNG_IMAGE");
        assert_eq!(json["url"], LOGO_URL);
        assert!(json.get("link_type").is_none());
    }

    proptest! {
        #[test]
        fn prop_validation_is_deterministic(url in "\\PC{0,64}", idx in 0usize..6) {
            let link_type = LinkType::all()[idx];
            prop_assert_eq!(
                validate_link_url(link_type, &url),
                validate_link_url(link_type, &url)
            );
        }

        #[test]
        fn prop_png_extension_any_case(name in "[a-z0-9_-]{1,16}", upper in proptest::bool::ANY) {
            let ext = if upper { "PNG" } else { "png" };
            let url = format!("https://example.com/images/{name}.{ext}");
            prop_assert_eq!(validate_link_url(LinkType::PngImage, &url), Ok(()));
            let is_pdf_mismatch = matches!(
                validate_link_url(LinkType::PdfDocument, &url),
                Err(LinkError::Mismatch { .. })
            );
            prop_assert!(is_pdf_mismatch);
        }
    }
}
