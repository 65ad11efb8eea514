//! Submission flow shared by the flag-driven and interactive paths
//!
//! Composes the prompt, sends it through the provider boundary, and parses
//! the reply. One submission is outstanding at a time; each reply is parsed
//! fresh into an immutable `ParsedAdvice`.

use crate::advice::{parse_advice, ParsedAdvice};
use crate::errors::Result;
use crate::intake::{BioData, SymptomList};
use crate::prompt::build_prompt;
use crate::provider::AdviceProvider;

/// One completed submission: the prompt sent, the raw reply, and its parse
#[derive(Debug, Clone)]
pub struct Submission {
    pub prompt: String,
    pub raw_reply: String,
    pub advice: ParsedAdvice,
}

/// Run one submission end to end
///
/// Provider failures surface as errors; a malformed reply does not (the
/// parser degrades to defaults instead).
pub async fn submit(
    provider: &dyn AdviceProvider,
    bio: &BioData,
    symptoms: &SymptomList,
) -> Result<Submission> {
    let prompt = build_prompt(bio, symptoms);
    let raw_reply = provider.generate_advice(&prompt).await?;
    let advice = parse_advice(&raw_reply);

    Ok(Submission {
        prompt,
        raw_reply,
        advice,
    })
}
