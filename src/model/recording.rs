use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use url::Url;

const STAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const DISPLAY_FORMAT: &[FormatItem<'static>] = format_description!(
    "[month repr:long] [day padding:none], [year] at [hour repr:12 padding:none]:[minute] [period]"
);

fn stamp_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").expect("valid timestamp pattern")
    })
}

/// A server-stored recording. The filename is the only key the server knows;
/// renaming produces a different `Recording`, not a mutated one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recording {
    filename: String,
}

impl Recording {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Creation time embedded in the filename, if the fixed pattern is present
    /// and names a real calendar instant.
    pub fn created_at(&self) -> Option<PrimitiveDateTime> {
        let m = stamp_pattern().find(&self.filename)?;
        PrimitiveDateTime::parse(m.as_str(), STAMP_FORMAT).ok()
    }

    /// Human-readable creation time; empty when the filename carries none.
    pub fn display_timestamp(&self) -> String {
        self.created_at()
            .and_then(|dt| dt.format(DISPLAY_FORMAT).ok())
            .unwrap_or_default()
    }

    /// `{base}/recordings/{filename}` with the filename as a single encoded segment.
    pub fn audio_url(&self, base: &Url) -> Option<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push("recordings")
            .push(&self.filename);
        Some(url)
    }

    pub fn accent(&self) -> Accent {
        Accent::for_name(&self.filename)
    }
}

impl std::fmt::Display for Recording {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.filename)
    }
}

/// Pastel row color derived from the filename hash, stable across reloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accent {
    pub hue: u16,
    pub rgb: (u8, u8, u8),
}

impl Accent {
    const SATURATION: f32 = 0.70;
    const LIGHTNESS: f32 = 0.80;

    pub fn for_name(name: &str) -> Self {
        let digest = blake3::hash(name.as_bytes());
        let bytes = digest.as_bytes();
        let hue = u16::from_le_bytes([bytes[0], bytes[1]]) % 360;
        Self {
            hue,
            rgb: hsl_to_rgb(hue, Self::SATURATION, Self::LIGHTNESS),
        }
    }
}

fn hsl_to_rgb(hue: u16, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h = f32::from(hue) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match hue / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r), to_u8(g), to_u8(b))
}

#[cfg(test)]
#[path = "../tests/model/recording_tests.rs"]
mod tests;
