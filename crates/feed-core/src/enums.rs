//! # Enumerated Value Sets
//!
//! Every string-typed enumeration carried by a feed value is modelled as a
//! closed Rust enum. Each one exposes the same surface:
//!
//! - `all()`: every variant, in declaration order.
//! - `as_str()`: the wire string (the same string serde produces).
//! - `Display`: writes `as_str()`.
//! - `FromStr`: the membership test; unknown strings are rejected with
//!   [`ValueSetError::UnknownVariant`]. Matching is case-sensitive.
//!
//! The wire strings must stay in lockstep with the `$defs` enumerations in
//! `schemas/common.schema.json`; `feed-model` has a test asserting that.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueSetError;

macro_rules! value_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Returns every variant of this value set in declaration order.
            pub fn all() -> &'static [$name] {
                &[$(Self::$variant),+]
            }

            /// Returns the wire string for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValueSetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(ValueSetError::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

value_set! {
    /// Where an action is rendered relative to its feed item.
    ActionType {
        /// The main call to action.
        Primary => "PRIMARY",
        /// A less prominent action shown beside the primary one.
        Secondary => "SECONDARY",
        /// Hidden behind an overflow menu.
        Overflow => "OVERFLOW",
        /// A floating action button.
        Floating => "FLOATING",
    }
}

value_set! {
    /// How the client handles an action once it is invoked.
    Handling {
        /// Handled in place, inside the feed.
        Inline => "INLINE",
        /// Opens a dedicated full page.
        FullPage => "FULL_PAGE",
    }
}

value_set! {
    /// Lifecycle status of a feed item or nudge.
    Status {
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Done => "DONE",
    }
}

value_set! {
    /// Whether an element is shown in the feed.
    Visibility {
        Show => "SHOW",
        Hide => "HIDE",
    }
}

value_set! {
    /// Notification delivery channel.
    Channel {
        /// Firebase Cloud Messaging push notification.
        Fcm => "FCM",
        Email => "EMAIL",
        Sms => "SMS",
        Whatsapp => "WHATSAPP",
    }
}

value_set! {
    /// The product flavour a feed belongs to.
    Flavour {
        /// Health-care professional facing.
        Pro => "PRO",
        /// Consumer facing.
        Consumer => "CONSUMER",
    }
}

value_set! {
    /// Top-level keys of a serialized feed.
    Keys {
        Actions => "actions",
        Nudges => "nudges",
        Items => "items",
    }
}

value_set! {
    /// Tri-state filter over a boolean attribute.
    BooleanFilter {
        True => "TRUE",
        False => "FALSE",
        Both => "BOTH",
    }
}

value_set! {
    /// Markup used for an item's body text.
    TextType {
        Html => "HTML",
        Markdown => "MARKDOWN",
        Plain => "PLAIN",
    }
}

value_set! {
    /// Declared content type of a link. Determines which URL grammar the
    /// link's `url` must follow.
    LinkType {
        /// A playable video on a recognized video host.
        YoutubeVideo => "YOUTUBE_VIDEO",
        PngImage => "PNG_IMAGE",
        SvgImage => "SVG_IMAGE",
        PdfDocument => "PDF_DOCUMENT",
        /// A directly linked MP4 video file.
        Mp4 => "MP4",
        /// Any web link.
        Default => "DEFAULT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_value_set<T>(all: &[T])
    where
        T: Copy + Eq + std::hash::Hash + fmt::Debug + fmt::Display + FromStr + Serialize,
        <T as FromStr>::Err: fmt::Debug,
    {
        let mut seen = HashSet::new();
        for v in all {
            assert!(seen.insert(*v), "duplicate variant {v:?}");
            let text = v.to_string();
            let parsed: T = text.parse().unwrap();
            assert_eq!(parsed, *v);
            let json = serde_json::to_string(v).unwrap();
            assert_eq!(json, format!("\"{text}\""));
        }
    }

    #[test]
    fn test_all_value_sets_roundtrip() {
        assert_value_set(ActionType::all());
        assert_value_set(Handling::all());
        assert_value_set(Status::all());
        assert_value_set(Visibility::all());
        assert_value_set(Channel::all());
        assert_value_set(Flavour::all());
        assert_value_set(Keys::all());
        assert_value_set(BooleanFilter::all());
        assert_value_set(TextType::all());
        assert_value_set(LinkType::all());
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(ActionType::Floating.as_str(), "FLOATING");
        assert_eq!(Handling::FullPage.as_str(), "FULL_PAGE");
        assert_eq!(Status::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!(Visibility::Hide.as_str(), "HIDE");
        assert_eq!(Channel::Whatsapp.as_str(), "WHATSAPP");
        assert_eq!(Flavour::Consumer.as_str(), "CONSUMER");
        assert_eq!(Keys::Actions.as_str(), "actions");
        assert_eq!(BooleanFilter::Both.as_str(), "BOTH");
        assert_eq!(TextType::Markdown.as_str(), "MARKDOWN");
        assert_eq!(LinkType::PdfDocument.as_str(), "PDF_DOCUMENT");
        assert_eq!(LinkType::Mp4.as_str(), "MP4");
    }

    #[test]
    fn test_unknown_value_rejected() {
        let err = "bogus".parse::<Status>().unwrap_err();
        assert_eq!(err.to_string(), "bogus is not a valid Status");
        assert!("bogus bonoko".parse::<ActionType>().is_err());
        assert!("".parse::<LinkType>().is_err());
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!("primary".parse::<ActionType>().is_err());
        assert!("ACTIONS".parse::<Keys>().is_err());
        assert!("actions".parse::<Keys>().is_ok());
    }

    #[test]
    fn test_serde_rejects_unknown_value() {
        let result: Result<Channel, _> = serde_json::from_str("\"PIGEON\"");
        assert!(result.is_err());
        let ok: Channel = serde_json::from_str("\"SMS\"").unwrap();
        assert_eq!(ok, Channel::Sms);
    }
}
