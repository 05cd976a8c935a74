//! Voice style and language catalogs.

use serde::{Deserialize, Serialize};

/// Identifier of a built-in voice style (e.g. `"M1"`, `"F3"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceStyleId(pub String);

impl std::fmt::Display for VoiceStyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Information about an available voice style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceInfo {
    /// Voice identifier (used in synthesis requests).
    pub id: VoiceStyleId,

    /// Human-readable display name.
    pub name: String,

    /// Gender grouping used by frontends.
    pub gender: VoiceGender,
}

/// Voice gender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoiceGender {
    Female,
    Male,
}

/// List the built-in voice styles shipped with the synthesis models.
#[must_use]
pub fn available_voices() -> Vec<VoiceInfo> {
    let male = (1..=5).map(|i| voice(&format!("M{i}"), &format!("Male Voice {i}"), VoiceGender::Male));
    let female = (1..=5).map(|i| {
        voice(
            &format!("F{i}"),
            &format!("Female Voice {i}"),
            VoiceGender::Female,
        )
    });
    male.chain(female).collect()
}

/// List the supported language codes with display names.
#[must_use]
pub fn available_languages() -> Vec<(&'static str, &'static str)> {
    vec![
        ("en", "English"),
        ("ko", "Korean"),
        ("es", "Spanish"),
        ("pt", "Portuguese"),
        ("fr", "French"),
    ]
}

fn voice(id: &str, name: &str, gender: VoiceGender) -> VoiceInfo {
    VoiceInfo {
        id: VoiceStyleId(id.to_string()),
        name: name.to_string(),
        gender,
    }
}
