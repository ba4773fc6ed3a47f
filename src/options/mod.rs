//! Option bags that serialize to and from query parameters.
//!
//! Each options type lists its fields once, in an explicit table that maps
//! the wire-name to a pair of typed accessors. [`QueryOptions`] drives every
//! conversion from that table:
//!
//! ```
//! use cielo24::options::{CaptionOptions, QueryOptions};
//! use cielo24::Case;
//!
//! let mut options = CaptionOptions {
//!     caption_by_sentence: Some(true),
//!     force_case: Some(Case::Upper),
//!     ..Default::default()
//! };
//! options.populate_from_raw_pairs(&["build_url=true", "dfxp_header=header"])?;
//!
//! assert_eq!(
//!     options.to_query(),
//!     "build_url=true&caption_by_sentence=true&dfxp_header=header&force_case=upper"
//! );
//! # Ok::<(), cielo24::Cielo24Error>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Cielo24Error, Result};
use crate::query::{self, Escaping};

mod caption;
mod job;
mod job_list;
mod perform_transcription;
mod transcript;
pub mod value;

pub use caption::CaptionOptions;
pub use job::NewJobOptions;
pub use job_list::JobListOptions;
pub use perform_transcription::PerformTranscriptionOptions;
pub use transcript::{CommonOptions, TranscriptOptions};
pub use value::{FieldKind, OptionValue};

/// One row of an options type's field table.
pub struct Field<O> {
    /// The key the server expects.
    pub name: &'static str,
    pub kind: FieldKind,
    pub(crate) read: fn(&O) -> Option<String>,
    pub(crate) write: fn(&mut O, &str) -> Result<()>,
}

impl<O> fmt::Debug for Field<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Builds a [`Field`] for `$owner.$path` holding an `Option<$value>`.
macro_rules! field {
    ($owner:ty, $name:literal, $($path:ident).+ : $value:ty) => {{
        fn read(options: &$owner) -> Option<String> {
            options
                .$($path).+
                .as_ref()
                .map(<$value as $crate::options::OptionValue>::to_query_value)
        }
        fn write(options: &mut $owner, raw: &str) -> $crate::errors::Result<()> {
            options.$($path).+ = $crate::options::value::decode_field::<$value>(raw)?;
            Ok(())
        }
        $crate::options::Field {
            name: $name,
            kind: <$value as $crate::options::OptionValue>::KIND,
            read,
            write,
        }
    }};
}
pub(crate) use field;

/// `key`, `key=` or `key=value`; only the first match of an input is used.
static RAW_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([^?=&]+)(=([^&]*))?").expect("valid raw pair pattern"));

/// A configuration object that serializes to query parameters.
pub trait QueryOptions: Sized + 'static {
    /// The explicit wire-name table for this type.
    fn fields() -> &'static [Field<Self>];

    /// Every set field as `wire-name -> value`; unset fields are omitted.
    fn to_mapping(&self) -> BTreeMap<String, String> {
        Self::fields()
            .iter()
            .filter_map(|field| (field.read)(self).map(|value| (field.name.to_string(), value)))
            .collect()
    }

    /// [`to_mapping`](Self::to_mapping) rendered as an escaped query string.
    fn to_query(&self) -> String {
        query::encode(&self.to_mapping(), Escaping::Escaped)
    }

    /// Set the field whose wire-name is exactly `key`.
    ///
    /// Fails with [`Cielo24Error::InvalidOption`] for an unknown key and with
    /// [`Cielo24Error::Format`] when `value` does not decode; in both cases
    /// `self` is left untouched.
    fn populate_from_pair(&mut self, key: &str, value: &str) -> Result<()> {
        let field = Self::fields()
            .iter()
            .find(|field| field.name == key)
            .ok_or_else(|| Cielo24Error::InvalidOption(key.to_string()))?;
        (field.write)(self, value)
    }

    /// Apply raw `key=value` strings, typically collected from a command line.
    ///
    /// Each element carries one pair. If an element happens to contain more
    /// (`a=1&b=2`), only the first is applied. A bare `key` sets an empty
    /// value.
    fn populate_from_raw_pairs<S: AsRef<str>>(&mut self, raw: &[S]) -> Result<()> {
        for item in raw {
            let item = item.as_ref();
            let captures = RAW_PAIR
                .captures(item)
                .ok_or_else(|| Cielo24Error::InvalidOption(item.to_string()))?;
            let key = &captures[1];
            let value = captures.get(3).map_or("", |m| m.as_str());
            self.populate_from_pair(key, value)?;
        }
        Ok(())
    }
}
