use crate::error::FocoError;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Store-assigned document identifier.
///
/// Ids start at 1 and are never reused by a store. `DocId::UNASSIGNED` marks a
/// document that has not been inserted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(pub u64);

impl DocId {
    pub const UNASSIGNED: DocId = DocId(0);
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocId {
    type Err = FocoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(0) | Err(_) => Err(FocoError::Api(format!("Invalid document id: {}", s))),
            Ok(n) => Ok(DocId(n)),
        }
    }
}

/// A 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CoverColor(pub u32);

/// Shown behind documents that have no cover at all.
pub const DEFAULT_COVER_COLOR: CoverColor = CoverColor(0xFF45_5A64);

static NAMED_COLORS: Lazy<HashMap<&'static str, CoverColor>> = Lazy::new(|| {
    HashMap::from([
        ("black", CoverColor(0xFF00_0000)),
        ("white", CoverColor(0xFFFF_FFFF)),
        ("red", CoverColor(0xFFF4_4336)),
        ("pink", CoverColor(0xFFE9_1E63)),
        ("purple", CoverColor(0xFF9C_27B0)),
        ("indigo", CoverColor(0xFF3F_51B5)),
        ("blue", CoverColor(0xFF21_96F3)),
        ("teal", CoverColor(0xFF00_9688)),
        ("green", CoverColor(0xFF4C_AF50)),
        ("amber", CoverColor(0xFFFF_C107)),
        ("orange", CoverColor(0xFFFF_9800)),
        ("brown", CoverColor(0xFF79_5548)),
        ("grey", CoverColor(0xFF9E_9E9E)),
        ("slate", DEFAULT_COVER_COLOR),
    ])
});

impl CoverColor {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl fmt::Display for CoverColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for CoverColor {
    type Err = FocoError;

    /// Accepts `#RRGGBB` (opaque), `#AARRGGBB`, or a palette name like `teal`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(named) = NAMED_COLORS.get(trimmed.to_lowercase().as_str()) {
            return Ok(*named);
        }

        let hex = trimmed
            .strip_prefix('#')
            .ok_or_else(|| FocoError::InvalidColor(s.to_string()))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FocoError::InvalidColor(s.to_string()));
        }
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| FocoError::InvalidColor(s.to_string()))?;
        match hex.len() {
            6 => Ok(CoverColor(0xFF00_0000 | value)),
            8 => Ok(CoverColor(value)),
            _ => Err(FocoError::InvalidColor(s.to_string())),
        }
    }
}

impl TryFrom<String> for CoverColor {
    type Error = FocoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CoverColor> for String {
    fn from(color: CoverColor) -> Self {
        color.to_string()
    }
}

/// A document has at most one cover: a stored image or a solid color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cover {
    Image(PathBuf),
    Color(CoverColor),
}

impl Cover {
    pub fn image_path(&self) -> Option<&PathBuf> {
        match self {
            Cover::Image(path) => Some(path),
            Cover::Color(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub id: DocId,
    pub name: String,
    // None until the first save computes it
    #[serde(default)]
    pub words: Option<u32>,
    #[serde(default)]
    pub working_time_ms: Option<u64>,
    #[serde(default)]
    pub last_edition: Option<DateTime<Utc>>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub cover: Option<Cover>,
}

impl DocumentMetadata {
    pub fn new(name: String) -> Self {
        Self {
            id: DocId::UNASSIGNED,
            name,
            words: None,
            working_time_ms: None,
            last_edition: None,
            favorite: false,
            cover: None,
        }
    }

    pub fn working_time(&self) -> Option<Duration> {
        self.working_time_ms.map(Duration::from_millis)
    }

    /// Adds a writing session to the accumulated working time.
    pub fn add_working_time(&mut self, worked: Duration) {
        let worked_ms = u64::try_from(worked.as_millis()).unwrap_or(u64::MAX);
        let total = self.working_time_ms.unwrap_or(0).saturating_add(worked_ms);
        self.working_time_ms = Some(total);
    }

    pub fn cover_image(&self) -> Option<&PathBuf> {
        self.cover.as_ref().and_then(Cover::image_path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub metadata: DocumentMetadata,
    pub text: String,
}

impl Document {
    pub fn new(name: String, text: String) -> Self {
        Self {
            metadata: DocumentMetadata::new(name),
            text,
        }
    }

    pub fn id(&self) -> DocId {
        self.metadata.id
    }
}
