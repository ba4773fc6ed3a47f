use chrono::{DateTime, Utc};

use super::{field, CommonOptions, Field, QueryOptions};
use crate::enums::{Case, LineEnding, SpeakerId, Tag};

/// Query options for `get_caption`.
///
/// See the cielo24 API documentation for the effect of each option; every
/// field is optional and unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionOptions {
    pub common: CommonOptions,
    /// Return a URL to the caption file instead of its contents.
    pub build_url: Option<bool>,
    pub caption_words_min: Option<i32>,
    pub caption_by_sentence: Option<bool>,
    pub characters_per_caption_line: Option<i32>,
    pub dfxp_header: Option<String>,
    pub dfxp_include_head: Option<bool>,
    pub disallow_dangling: Option<bool>,
    pub display_effects_speaker_as: Option<String>,
    pub display_speaker_id: Option<SpeakerId>,
    pub force_case: Option<Case>,
    pub include_dfxp_metadata: Option<bool>,
    pub layout_target_caption_length_ms: Option<i32>,
    pub line_break_on_sentence: Option<bool>,
    pub line_ending_format: Option<LineEnding>,
    pub lines_per_caption: Option<i32>,
    pub maximum_caption_duration: Option<i32>,
    pub merge_gap_interval: Option<i32>,
    pub minimum_caption_length_ms: Option<i32>,
    pub minimum_gap_between_captions_ms: Option<i32>,
    pub qt_seamless: Option<bool>,
    pub silence_max_ms: Option<i32>,
    pub single_speaker_per_caption: Option<bool>,
    pub sound_threshold: Option<i32>,
    pub sound_tokens_by_caption: Option<bool>,
    pub sound_tokens_by_line: Option<bool>,
    pub sound_tokens_by_caption_list: Option<Vec<Tag>>,
    pub sound_tokens_by_line_list: Option<Vec<Tag>>,
    pub speaker_on_new_line: Option<bool>,
    pub srt_format: Option<String>,
    pub strip_square_brackets: Option<bool>,
    pub utf8_mark: Option<bool>,
}

impl QueryOptions for CaptionOptions {
    fn fields() -> &'static [Field<Self>] {
        static FIELDS: &[Field<CaptionOptions>] = &[
            field!(CaptionOptions, "elementlist_version", common.elementlist_version: DateTime<Utc>),
            field!(CaptionOptions, "emit_speaker_change_tokens_as", common.emit_speaker_change_tokens_as: String),
            field!(CaptionOptions, "mask_profanity", common.mask_profanity: bool),
            field!(CaptionOptions, "remove_disfluencies", common.remove_disfluencies: bool),
            field!(CaptionOptions, "remove_sounds_list", common.remove_sounds_list: Vec<Tag>),
            field!(CaptionOptions, "remove_sound_references", common.remove_sound_references: bool),
            field!(CaptionOptions, "replace_slang", common.replace_slang: bool),
            field!(CaptionOptions, "sound_boundaries", common.sound_boundaries: Vec<char>),
            field!(CaptionOptions, "build_url", build_url: bool),
            field!(CaptionOptions, "caption_words_min", caption_words_min: i32),
            field!(CaptionOptions, "caption_by_sentence", caption_by_sentence: bool),
            field!(CaptionOptions, "characters_per_caption_line", characters_per_caption_line: i32),
            field!(CaptionOptions, "dfxp_header", dfxp_header: String),
            field!(CaptionOptions, "dfxp_include_head", dfxp_include_head: bool),
            field!(CaptionOptions, "disallow_dangling", disallow_dangling: bool),
            field!(CaptionOptions, "display_effects_speaker_as", display_effects_speaker_as: String),
            field!(CaptionOptions, "display_speaker_id", display_speaker_id: SpeakerId),
            field!(CaptionOptions, "force_case", force_case: Case),
            field!(CaptionOptions, "include_dfxp_metadata", include_dfxp_metadata: bool),
            field!(CaptionOptions, "layout_target_caption_length_ms", layout_target_caption_length_ms: i32),
            field!(CaptionOptions, "line_break_on_sentence", line_break_on_sentence: bool),
            field!(CaptionOptions, "line_ending_format", line_ending_format: LineEnding),
            field!(CaptionOptions, "lines_per_caption", lines_per_caption: i32),
            field!(CaptionOptions, "maximum_caption_duration", maximum_caption_duration: i32),
            field!(CaptionOptions, "merge_gap_interval", merge_gap_interval: i32),
            field!(CaptionOptions, "minimum_caption_length_ms", minimum_caption_length_ms: i32),
            field!(CaptionOptions, "minimum_gap_between_captions_ms", minimum_gap_between_captions_ms: i32),
            field!(CaptionOptions, "qt_seamless", qt_seamless: bool),
            field!(CaptionOptions, "silence_max_ms", silence_max_ms: i32),
            field!(CaptionOptions, "single_speaker_per_caption", single_speaker_per_caption: bool),
            field!(CaptionOptions, "sound_threshold", sound_threshold: i32),
            field!(CaptionOptions, "sound_tokens_by_caption", sound_tokens_by_caption: bool),
            field!(CaptionOptions, "sound_tokens_by_line", sound_tokens_by_line: bool),
            field!(CaptionOptions, "sound_tokens_by_caption_list", sound_tokens_by_caption_list: Vec<Tag>),
            field!(CaptionOptions, "sound_tokens_by_line_list", sound_tokens_by_line_list: Vec<Tag>),
            field!(CaptionOptions, "speaker_on_new_line", speaker_on_new_line: bool),
            field!(CaptionOptions, "srt_format", srt_format: String),
            field!(CaptionOptions, "strip_square_brackets", strip_square_brackets: bool),
            field!(CaptionOptions, "utf8_mark", utf8_mark: bool),
        ];
        FIELDS
    }
}
