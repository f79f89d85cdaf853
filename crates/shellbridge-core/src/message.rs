//! Message protocol shared by the host shell and the rendering context

use serde::{Deserialize, Serialize};

/// Host platform reported through [`Message::Platform`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    /// Apple mobile host, wire string `"IOS"`
    #[serde(rename = "IOS")]
    Ios,
    /// Android host, wire string `"Android"`
    Android,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "IOS"),
            Platform::Android => write!(f, "Android"),
        }
    }
}

/// Messages exchanged between the host shell and the rendering context
///
/// The wire form is a flat JSON object discriminated by `kind`, with
/// exactly the variant's own fields and no envelope:
///
/// ```text
/// {"kind":"Lightbox","index":3,"isMainImage":false}
/// {"kind":"Platform","value":"IOS"}
/// ```
///
/// The set of variants is closed. A payload with an unknown `kind`, or
/// a `Platform` whose `value` is not in the enumeration, fails
/// deserialization rather than being coerced into a near-miss variant.
/// Messages are transient values; crossing the boundary is by copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Message {
    /// Ask the host to invoke its native share UI
    Share,
    /// Host reports which platform is active
    Platform {
        value: Platform,
    },
    /// Ask the host to report its platform
    PlatformQuery,
    /// Ask the host to open the image viewer at an index
    #[serde(rename_all = "camelCase")]
    Lightbox {
        index: u32,
        is_main_image: bool,
    },
    /// Icon identifier/URL for share UI customization
    ShareIcon {
        value: String,
    },
}

impl Message {
    /// Discriminant of this message, usable without borrowing fields
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Share => MessageKind::Share,
            Message::Platform { .. } => MessageKind::Platform,
            Message::PlatformQuery => MessageKind::PlatformQuery,
            Message::Lightbox { .. } => MessageKind::Lightbox,
            Message::ShareIcon { .. } => MessageKind::ShareIcon,
        }
    }
}

/// Fieldless discriminant for [`Message`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Share,
    Platform,
    PlatformQuery,
    Lightbox,
    ShareIcon,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Share => write!(f, "Share"),
            MessageKind::Platform => write!(f, "Platform"),
            MessageKind::PlatformQuery => write!(f, "PlatformQuery"),
            MessageKind::Lightbox => write!(f, "Lightbox"),
            MessageKind::ShareIcon => write!(f, "ShareIcon"),
        }
    }
}

/// Check whether an untyped inbound payload is a well-formed
/// [`Message::Platform`], including an in-enumeration `value`.
///
/// Receivers are expected to narrow with this before trusting
/// variant-specific fields; inbound payloads are not re-validated
/// anywhere else.
pub fn is_platform_message(candidate: &serde_json::Value) -> bool {
    matches!(
        Message::deserialize(candidate),
        Ok(Message::Platform { .. })
    )
}

/// Check whether an untyped inbound payload is a well-formed
/// [`Message::ShareIcon`], including a string `value`.
pub fn is_share_icon_message(candidate: &serde_json::Value) -> bool {
    matches!(
        Message::deserialize(candidate),
        Ok(Message::ShareIcon { .. })
    )
}
