//! Prompt composition for the Gemini request
//!
//! The system instruction pins down the `###`-sectioned reply format the
//! response parser expects. The format is a convention only: the parser
//! tolerates any deviation, so changes here never need a parser change to
//! stay safe.

use crate::intake::{BioData, SymptomList};

/// Fixed system instruction sent with every request
pub const SYSTEM_INSTRUCTION: &str = r#"You are a medical assistant providing general health advice based on user symptoms. Format your response strictly as follows, using clear section headers and numbered lists where applicable:

### Probable Causes
List possible reasons for the symptoms, one per line. Start each line with "- " (dash and space). If no causes are identified, write "No specific causes identified."

### Advice
Provide actionable steps the user can take, numbered as a list (e.g., "1. ", "2. "). If no specific advice applies, write "Monitor your symptoms and rest."

### Disclaimer
Include a single-line disclaimer about consulting a professional, e.g., "Always consult a healthcare professional for an accurate diagnosis." Do not skip this section.

Example response:
### Probable Causes
- The user might be experiencing a common cold.
- Could be a mild infection.
### Advice
1. Rest well to help your body recover.
2. Stay hydrated with water or tea.
3. Consider ibuprofen for symptom relief.
### Disclaimer
Always consult a healthcare professional for an accurate diagnosis.

Stick to this structure exactly, even if some sections are minimal. Use concise, clear language suitable for a general audience."#;

/// Compose the user prompt from the intake data
pub fn build_prompt(bio: &BioData, symptoms: &SymptomList) -> String {
    let bio_sentence = format!(
        "The user is {} years old, weighs {} pounds, and is {}. Their height is {}.",
        bio.age,
        bio.weight_lbs,
        bio.sex,
        bio.height_description()
    );
    let symptom_sentence = format!("They have the following symptoms: {}.", symptoms.joined());

    format!("{} {} What should they do?", bio_sentence, symptom_sentence)
}
