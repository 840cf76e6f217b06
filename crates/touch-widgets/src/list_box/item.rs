//! List rows: a label plus an optional 6-byte tag.

use alloc::string::String;
use core::fmt::{self, Write as _};

use crate::config::TAG_LEN;

/// Fixed 6-byte value attached to a row, e.g. a Bluetooth/MAC address.
///
/// The widget never draws it; applications read it back through
/// [`ListBox::selected_tag`](super::ListBox::selected_tag). All-zero means
/// "no tag".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tag([u8; TAG_LEN]);

impl Tag {
    /// The "no tag" value.
    pub const ZERO: Self = Self([0; TAG_LEN]);

    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub const fn bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// `true` when every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Colon-separated upper-case hex (`AA:BB:CC:DD:EE:FF`) without heap
    /// allocation.
    pub fn to_hex_string(&self) -> heapless::String<17> {
        let mut s = heapless::String::new();
        // 6 × "XX" + 5 × ":" is exactly 17 bytes, so this write never overflows.
        write!(s, "{self}").ok();
        s
    }
}

impl From<[u8; TAG_LEN]> for Tag {
    fn from(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(':')?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    text: String,
    tag: Tag,
}

impl ListItem {
    /// Row with a label and no tag.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: Tag::ZERO,
        }
    }

    /// Row with a label and a tag.
    pub fn with_tag(text: impl Into<String>, tag: impl Into<Tag>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    /// Empty label, zero tag. Returned for out-of-range lookups.
    pub const fn empty() -> Self {
        Self {
            text: String::new(),
            tag: Tag::ZERO,
        }
    }

    /// Display label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attached tag ([`Tag::ZERO`] if none).
    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl From<&str> for ListItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ListItem {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
