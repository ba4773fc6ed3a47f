use chrono::{DateTime, Utc};

use super::{field, Field, QueryOptions};
use crate::enums::Tag;

/// Options shared by transcript and caption downloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonOptions {
    /// Element list version to build from; the latest when unset.
    pub elementlist_version: Option<DateTime<Utc>>,
    pub emit_speaker_change_tokens_as: Option<String>,
    pub mask_profanity: Option<bool>,
    pub remove_disfluencies: Option<bool>,
    pub remove_sounds_list: Option<Vec<Tag>>,
    pub remove_sound_references: Option<bool>,
    pub replace_slang: Option<bool>,
    /// Pair of characters placed around sound tags, e.g. `(<, >)`.
    pub sound_boundaries: Option<Vec<char>>,
}

/// Query options for `get_transcript`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptOptions {
    pub common: CommonOptions,
    pub create_paragraphs: Option<bool>,
    pub newlines_after_paragraph: Option<i32>,
    pub newlines_after_sentence: Option<i32>,
    pub timecode_every_paragraph: Option<bool>,
    pub timecode_format: Option<String>,
    /// Seconds between timecodes.
    pub timecode_interval: Option<i32>,
    /// Milliseconds added to every timecode.
    pub timecode_offset: Option<i32>,
}

impl QueryOptions for TranscriptOptions {
    fn fields() -> &'static [Field<Self>] {
        static FIELDS: &[Field<TranscriptOptions>] = &[
            field!(TranscriptOptions, "elementlist_version", common.elementlist_version: DateTime<Utc>),
            field!(TranscriptOptions, "emit_speaker_change_tokens_as", common.emit_speaker_change_tokens_as: String),
            field!(TranscriptOptions, "mask_profanity", common.mask_profanity: bool),
            field!(TranscriptOptions, "remove_disfluencies", common.remove_disfluencies: bool),
            field!(TranscriptOptions, "remove_sounds_list", common.remove_sounds_list: Vec<Tag>),
            field!(TranscriptOptions, "remove_sound_references", common.remove_sound_references: bool),
            field!(TranscriptOptions, "replace_slang", common.replace_slang: bool),
            field!(TranscriptOptions, "sound_boundaries", common.sound_boundaries: Vec<char>),
            field!(TranscriptOptions, "create_paragraphs", create_paragraphs: bool),
            field!(TranscriptOptions, "newlines_after_paragraph", newlines_after_paragraph: i32),
            field!(TranscriptOptions, "newlines_after_sentence", newlines_after_sentence: i32),
            field!(TranscriptOptions, "timecode_every_paragraph", timecode_every_paragraph: bool),
            field!(TranscriptOptions, "timecode_format", timecode_format: String),
            field!(TranscriptOptions, "timecode_interval", timecode_interval: i32),
            field!(TranscriptOptions, "timecode_offset", timecode_offset: i32),
        ];
        FIELDS
    }
}
