use super::{field, Field, QueryOptions};
use crate::enums::{CustomerApprovalStep, CustomerApprovalTool, Fidelity, Flags};

/// Extra job configuration sent with `perform_transcription`.
///
/// Unlike the other options types this one travels as a JSON object in the
/// `options` query parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformTranscriptionOptions {
    pub customer_approval_steps: Option<Flags<CustomerApprovalStep>>,
    pub customer_approval_tool: Option<CustomerApprovalTool>,
    pub custom_metadata: Option<String>,
    pub generate_media_intelligence_for_iwp: Option<bool>,
    pub notes: Option<String>,
    /// Fidelities for which interim work products are returned.
    pub return_iwp: Option<Vec<Fidelity>>,
    pub speaker_id: Option<bool>,
}

impl QueryOptions for PerformTranscriptionOptions {
    fn fields() -> &'static [Field<Self>] {
        static FIELDS: &[Field<PerformTranscriptionOptions>] = &[
            field!(PerformTranscriptionOptions, "customer_approval_steps", customer_approval_steps: Flags<CustomerApprovalStep>),
            field!(PerformTranscriptionOptions, "customer_approval_tool", customer_approval_tool: CustomerApprovalTool),
            field!(PerformTranscriptionOptions, "custom_metadata", custom_metadata: String),
            field!(PerformTranscriptionOptions, "generate_media_intelligence_for_iwp", generate_media_intelligence_for_iwp: bool),
            field!(PerformTranscriptionOptions, "notes", notes: String),
            field!(PerformTranscriptionOptions, "return_iwp", return_iwp: Vec<Fidelity>),
            field!(PerformTranscriptionOptions, "speaker_id", speaker_id: bool),
        ];
        FIELDS
    }
}
