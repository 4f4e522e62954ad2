//! # Link Subcommand
//!
//! Checks a single URL against a link type without building a document.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use feed_core::LinkType;
use feed_model::{validate_link_tag, LinkError};

use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for the `feedctl link` subcommand.
#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Link type tag, e.g. YOUTUBE_VIDEO or PNG_IMAGE.
    #[arg(long)]
    pub link_type: String,

    /// URL to check.
    #[arg(value_name = "URL")]
    pub url: String,
}

/// Execute the link subcommand.
pub fn run_link(args: &LinkArgs, out: &mut impl Write) -> Result<u8> {
    match validate_link_tag(&args.link_type, &args.url) {
        Ok(()) => {
            writeln!(out, "OK: {} is a valid {} link", args.url, args.link_type)?;
            Ok(EXIT_OK)
        }
        Err(e @ LinkError::UnknownLinkType(_)) => {
            let known: Vec<&str> = LinkType::all().iter().map(|t| t.as_str()).collect();
            writeln!(out, "FAIL: {e} (expected one of {})", known.join(", "))?;
            Ok(EXIT_INVALID)
        }
        Err(e) => {
            writeln!(out, "FAIL: {e}")?;
            Ok(EXIT_INVALID)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_model::SAMPLE_VIDEO_URL;

    fn run(link_type: &str, url: &str) -> (u8, String) {
        let args = LinkArgs {
            link_type: link_type.into(),
            url: url.into(),
        };
        let mut buf = Vec::new();
        let code = run_link(&args, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn accepts_matching_url() {
        let (code, text) = run("YOUTUBE_VIDEO", SAMPLE_VIDEO_URL);
        assert_eq!(code, EXIT_OK);
        assert!(text.starts_with("OK:"));
    }

    #[test]
    fn rejects_mismatched_url() {
        let (code, text) = run("YOUTUBE_VIDEO", "https://example.com/not_a_video");
        assert_eq!(code, EXIT_INVALID);
        assert!(text.contains("not a valid YOUTUBE_VIDEO URL"), "{text}");
    }

    #[test]
    fn unknown_tag_lists_known_tags() {
        let (code, text) = run("GIF_IMAGE", "https://example.com/a.gif");
        assert_eq!(code, EXIT_INVALID);
        assert!(text.contains("PNG_IMAGE"), "{text}");
    }
}
