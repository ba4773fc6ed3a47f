//! Enumerators used by the cielo24 API and their wire vocabulary.
//!
//! The server rarely uses the Rust variant name on the wire: most values are
//! sent as an upper snake case symbol (`MEDIA_FAILURE`), some carry an
//! explicit description (`"In Process"`, `"en"`). [`WireEnum`] captures
//! both and gives every enumerator the same describe/parse rules.

use std::fmt;
use std::marker::PhantomData;
use std::ops::BitOr;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::errors::{Cielo24Error, Result};

/// Bidirectional mapping between an enumerator and its wire strings.
pub trait WireEnum: Copy + Eq + IntoEnumIterator + Into<&'static str> + 'static {
    /// Used in [`Cielo24Error::Format`] messages.
    const TYPE_NAME: &'static str;

    /// The registered wire string, if this value has one.
    fn description(self) -> Option<&'static str> {
        None
    }

    /// Obsolete tokens that are still accepted on input but never produced.
    fn legacy_synonym(_token: &str) -> Option<Self> {
        None
    }

    /// Upper snake case symbol name, e.g. `MEDIA_FAILURE`.
    fn name(self) -> &'static str {
        self.into()
    }

    /// The string the server expects for this value.
    fn describe(self) -> &'static str {
        self.description().unwrap_or_else(|| self.name())
    }

    /// Parse a wire token.
    ///
    /// Legacy synonyms win, then the first description that matches
    /// case-insensitively, then the symbol name (also case-insensitive).
    fn parse_wire(token: &str) -> Result<Self> {
        if let Some(value) = Self::legacy_synonym(token) {
            return Ok(value);
        }
        let by_description = Self::iter().find(|v| {
            v.description()
                .is_some_and(|d| d.to_lowercase() == token.to_lowercase())
        });
        if let Some(value) = by_description {
            return Ok(value);
        }
        Self::iter()
            .find(|v| v.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| Cielo24Error::format(token, Self::TYPE_NAME))
    }
}

/// `Display`, `FromStr` and serde impls that all go through [`WireEnum`].
macro_rules! wire_enum_impls {
    ($($ty:ty),+ $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.describe())
            }
        }

        impl FromStr for $ty {
            type Err = Cielo24Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_wire(s)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.describe())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse_wire(&raw).map_err(serde::de::Error::custom)
            }
        }
    )+};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    JobCreated,
    JobDeleted,
    JobAddMedia,
    JobAddTranscript,
    JobPerformTranscription,
    JobPerformPremiumSync,
    JobUpdateElementlist,
    JobGetTranscript,
    JobGetCaption,
    JobGetElementlist,
}

impl WireEnum for TaskType {
    const TYPE_NAME: &'static str = "TaskType";
}

/// The `ErrorType` field of an API error payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    LoginInvalid,
    AccountExists,
    AccountDoesNotExist,
    AccountUnprivileged,
    BadApiToken,
    InvalidQuery,
    InvalidOption,
    InvalidUrl,
    MissingParameter,
    NotImplemented,
    ItemNotFound,
    InvalidReturnHandlers,
    NotParentAccount,
    NoChildrenFound,
    UnhandledError,
}

impl WireEnum for ErrorType {
    const TYPE_NAME: &'static str = "ErrorType";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Authorizing,
    Pending,
    InProcess,
    Complete,
    Reviewing,
    MediaFailure,
}

impl WireEnum for JobStatus {
    const TYPE_NAME: &'static str = "JobStatus";

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Self::Authorizing => "Authorizing",
            Self::Pending => "Pending",
            Self::InProcess => "In Process",
            Self::Complete => "Complete",
            Self::Reviewing => "Reviewing",
            Self::MediaFailure => "Media Failure",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Economy,
    Standard,
    Priority,
    Critical,
}

impl WireEnum for Priority {
    const TYPE_NAME: &'static str = "Priority";
}

/// Transcription quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Fidelity {
    Mechanical,
    Premium,
    Professional,
}

/// Tier names the API used before `PREMIUM`/`PROFESSIONAL`.
const FIDELITY_SYNONYMS: &[(&str, Fidelity)] = &[
    ("STANDARD", Fidelity::Premium),
    ("HIGH", Fidelity::Professional),
];

impl WireEnum for Fidelity {
    const TYPE_NAME: &'static str = "Fidelity";

    fn legacy_synonym(token: &str) -> Option<Self> {
        FIDELITY_SYNONYMS
            .iter()
            .find(|(synonym, _)| synonym.eq_ignore_ascii_case(token))
            .map(|(_, fidelity)| *fidelity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptionFormat {
    Srt,
    Sbv,
    Scc,
    Dfxp,
    Qt,
    Transcript,
    Twx,
    Tpm,
    WebVtt,
    Echo,
}

impl WireEnum for CaptionFormat {
    const TYPE_NAME: &'static str = "CaptionFormat";
}

/// Kind of a token inside an element list sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    Word,
    Punctuation,
    Sound,
}

impl WireEnum for TokenType {
    const TYPE_NAME: &'static str = "TokenType";

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Self::Word => "word",
            Self::Punctuation => "punctuation",
            Self::Sound => "sound",
        })
    }
}

/// Sound and annotation tags attached to element list tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    Unknown,
    Inaudible,
    Crosstalk,
    Music,
    Noise,
    Laugh,
    Cough,
    Foreign,
    BlankAudio,
    Applause,
    Bleep,
    Guessed,
    EndsSentence,
}

impl WireEnum for Tag {
    const TYPE_NAME: &'static str = "Tag";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SpeakerId {
    No,
    Number,
    Name,
}

impl WireEnum for SpeakerId {
    const TYPE_NAME: &'static str = "SpeakerId";

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Self::No => "no",
            Self::Number => "number",
            Self::Name => "name",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SpeakerGender {
    Unknown,
    Male,
    Female,
}

impl WireEnum for SpeakerGender {
    const TYPE_NAME: &'static str = "SpeakerGender";
}

/// Case forcing applied to caption text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Case {
    Upper,
    Lower,
    Unchanged,
}

impl WireEnum for Case {
    const TYPE_NAME: &'static str = "Case";

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Unchanged => "",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LineEnding {
    Unix,
    Windows,
    Osx,
}

impl WireEnum for LineEnding {
    const TYPE_NAME: &'static str = "LineEnding";
}

/// Steps at which the customer approves the job; combinable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerApprovalStep {
    Translation,
    Return,
}

impl WireEnum for CustomerApprovalStep {
    const TYPE_NAME: &'static str = "CustomerApprovalStep";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerApprovalTool {
    Amara,
    #[strum(serialize = "CIELO24")]
    Cielo24,
}

impl WireEnum for CustomerApprovalTool {
    const TYPE_NAME: &'static str = "CustomerApprovalTool";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    English,
    French,
    Spanish,
    German,
    MandarinChinese,
    Portuguese,
    Japanese,
    Arabic,
    Korean,
    TraditionalChinese,
    Hindi,
    Italian,
    Russian,
    Turkish,
    Hebrew,
}

impl WireEnum for Language {
    const TYPE_NAME: &'static str = "Language";

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Self::English => "en",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::German => "de",
            Self::MandarinChinese => "cmn",
            Self::Portuguese => "pt",
            Self::Japanese => "jp",
            Self::Arabic => "ar",
            Self::Korean => "ko",
            Self::TraditionalChinese => "zh",
            Self::Hindi => "hi",
            Self::Italian => "it",
            Self::Russian => "ru",
            Self::Turkish => "tr",
            Self::Hebrew => "he",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum JobDifficulty {
    Good,
    Bad,
    Unknown,
}

impl WireEnum for JobDifficulty {
    const TYPE_NAME: &'static str = "JobDifficulty";

    fn description(self) -> Option<&'static str> {
        Some(match self {
            Self::Good => "Good",
            Self::Bad => "Bad",
            Self::Unknown => "Unknown",
        })
    }
}

wire_enum_impls!(
    TaskType,
    ErrorType,
    JobStatus,
    Priority,
    Fidelity,
    CaptionFormat,
    TokenType,
    Tag,
    SpeakerId,
    SpeakerGender,
    Case,
    LineEnding,
    CustomerApprovalStep,
    CustomerApprovalTool,
    Language,
    JobDifficulty,
);

/// A combination of independent values of a flag-style enumerator.
///
/// Values are stored by declaration index; iteration yields the set flags in
/// declaration order regardless of insertion order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags<E> {
    bits: u64,
    _marker: PhantomData<E>,
}

impl<E: WireEnum> Flags<E> {
    pub fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    fn bit(value: E) -> u64 {
        E::iter()
            .position(|v| v == value)
            .map_or(0, |index| 1 << index)
    }

    pub fn insert(&mut self, value: E) {
        self.bits |= Self::bit(value);
    }

    pub fn remove(&mut self, value: E) {
        self.bits &= !Self::bit(value);
    }

    pub fn contains(&self, value: E) -> bool {
        self.bits & Self::bit(value) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The individual flags that are set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = E> + '_ {
        E::iter().filter(|v| self.contains(*v))
    }
}

impl<E: WireEnum> Default for Flags<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: WireEnum> From<E> for Flags<E> {
    fn from(value: E) -> Self {
        let mut flags = Self::empty();
        flags.insert(value);
        flags
    }
}

impl<E: WireEnum> FromIterator<E> for Flags<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut flags = Self::empty();
        for value in iter {
            flags.insert(value);
        }
        flags
    }
}

impl<E: WireEnum> BitOr<E> for Flags<E> {
    type Output = Self;

    fn bitor(mut self, rhs: E) -> Self {
        self.insert(rhs);
        self
    }
}

impl<E: WireEnum> fmt::Debug for Flags<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|v| v.describe())).finish()
    }
}
