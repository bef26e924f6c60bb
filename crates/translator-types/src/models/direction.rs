//! Translation directions and their per-direction copy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target language of a translation command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    ToEnglish,
    ToJapanese,
}

/// Everything that differs between the two commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionProfile {
    /// External command name.
    pub command: &'static str,
    /// Human-readable target language.
    pub language: &'static str,
    /// Title of the in-progress toast.
    pub progress_title: &'static str,
    /// Title of the copy action.
    pub copy_title: &'static str,
    /// Title of the paste action.
    pub paste_title: &'static str,
    /// Instruction placed before the selected text.
    pub instruction: &'static str,
}

const PROFILES: [DirectionProfile; 2] = [
    DirectionProfile {
        command: "to-english",
        language: "English",
        progress_title: "Translating to English...",
        copy_title: "Copy English Translation",
        paste_title: "Paste English Translation",
        instruction: "Act as a software engineer translating a technical update for an \
English-speaking colleague. Use precise engineering vocabulary (merge, deploy, commit, etc.). \
Use common abbreviations like 'PR' instead of 'pull request'. Assume singular for terms like \
'commit' unless multiple are clearly specified in the source text. Translate the following \
Japanese text to English. Output only the translated text:",
    },
    DirectionProfile {
        command: "to-japanese",
        language: "Japanese",
        progress_title: "Translating to Japanese...",
        copy_title: "Copy Japanese Translation",
        paste_title: "Paste Japanese Translation",
        instruction: "Translate the following English text, which relates to software \
development, into natural-sounding Japanese suitable for technical communication. Use \
appropriate technical terms commonly used in Japan. Your response must contain strictly the \
translated text and nothing else. Do not include introductions, explanations, or alternative \
translations:",
    },
];

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::ToEnglish, Direction::ToJapanese];

    pub fn profile(self) -> &'static DirectionProfile {
        match self {
            Self::ToEnglish => &PROFILES[0],
            Self::ToJapanese => &PROFILES[1],
        }
    }

    pub fn command(self) -> &'static str {
        self.profile().command
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.command() == s)
            .ok_or_else(|| format!("Unknown direction: {}", s))
    }
}
