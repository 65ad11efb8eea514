//! Integration tests for the structured-response parser
//!
//! Exercises the parsing contract against realistic and adversarial replies,
//! plus property tests for the degrade-to-defaults policy.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use synapsemd::advice::{
    parse_advice, ParsedAdvice, DEFAULT_ADVICE, DEFAULT_CAUSE, DEFAULT_DISCLAIMER,
};

#[test]
fn parses_conforming_reply() {
    let raw = "### Probable Causes\n- Common cold\n### Advice\n1. Rest\n2. Hydrate\n### Disclaimer\nSee a doctor.";
    let advice = parse_advice(raw);

    assert_eq!(advice.probable_causes, vec!["Common cold"]);
    assert_eq!(advice.advice_steps, vec!["Rest", "Hydrate"]);
    assert_eq!(advice.disclaimer, "See a doctor.");
}

#[test]
fn empty_reply_is_fully_defaulted() {
    let advice = parse_advice("");
    assert_eq!(advice, ParsedAdvice::default());
    assert_eq!(advice.probable_causes, vec![DEFAULT_CAUSE.to_string()]);
    assert_eq!(advice.advice_steps, vec![DEFAULT_ADVICE.to_string()]);
    assert_eq!(advice.disclaimer, DEFAULT_DISCLAIMER);
}

#[test]
fn fields_default_independently() {
    let advice = parse_advice("### Advice\n1. Drink water");
    assert_eq!(advice.probable_causes, vec![DEFAULT_CAUSE.to_string()]);
    assert_eq!(advice.advice_steps, vec!["Drink water"]);
    assert_eq!(advice.disclaimer, DEFAULT_DISCLAIMER);
}

#[test]
fn reply_with_preamble_and_extra_sections() {
    // Models often wrap the template in chatter; everything outside the
    // recognized headers must be ignored.
    let raw = "Sure, here is my assessment.\n\
               ### Overview\nA quick summary.\n\
               ### Probable Causes\n- Seasonal allergies\n\
               ### Advice\n1. Try an antihistamine\n\
               ### Disclaimer\nConsult a professional.\n\
               ### Sources\nNone.";
    let advice = parse_advice(raw);

    assert_eq!(advice.probable_causes, vec!["Seasonal allergies"]);
    assert_eq!(advice.advice_steps, vec!["Try an antihistamine"]);
    assert_eq!(advice.disclaimer, "Consult a professional.");
}

#[test]
fn repeated_section_last_wins_and_earlier_is_discarded() {
    let raw = "### Advice\n1. Old step one\n2. Old step two\n### Advice\n1. New step";
    let advice = parse_advice(raw);
    assert_eq!(advice.advice_steps, vec!["New step"]);
}

#[test]
fn marker_stripping_is_single_pass() {
    let advice = parse_advice("### Probable Causes\n- - foo");
    assert_eq!(advice.probable_causes, vec!["- foo"]);
}

#[test]
fn parsing_is_deterministic() {
    let raw = "### Probable Causes\n- Flu\n### Advice\n1. Rest";
    assert_eq!(parse_advice(raw), parse_advice(raw));
}

#[quickcheck]
fn prop_input_without_delimiter_yields_defaults(s: String) -> TestResult {
    if s.contains("###") {
        return TestResult::discard();
    }
    // Without a delimiter the whole input is one section, so an input whose
    // first non-blank line happens to name a section classifies as one.
    let header = s
        .trim()
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .to_lowercase();
    if header.contains("probable causes")
        || header.contains("advice")
        || header.contains("disclaimer")
    {
        return TestResult::discard();
    }

    TestResult::from_bool(parse_advice(&s) == ParsedAdvice::default())
}

#[quickcheck]
fn prop_parser_never_leaves_a_field_empty(s: String) -> bool {
    let advice = parse_advice(&s);
    !advice.probable_causes.is_empty()
        && !advice.advice_steps.is_empty()
        && !advice.disclaimer.is_empty()
}

#[quickcheck]
fn prop_conforming_bodies_survive_in_order(causes: Vec<String>, steps: Vec<String>) -> TestResult {
    let clean = |items: &[String]| -> Vec<String> {
        items
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && !s.contains('\n') && !s.contains("###"))
            .collect()
    };
    let causes = clean(&causes);
    let steps = clean(&steps);
    if causes.is_empty() || steps.is_empty() {
        return TestResult::discard();
    }

    let mut raw = String::from("### Probable Causes\n");
    for cause in &causes {
        raw.push_str(&format!("- {}\n", cause));
    }
    raw.push_str("### Advice\n");
    for (i, step) in steps.iter().enumerate() {
        raw.push_str(&format!("{}. {}\n", i + 1, step));
    }
    raw.push_str("### Disclaimer\nSee a doctor.");

    let advice = parse_advice(&raw);
    TestResult::from_bool(advice.probable_causes == causes && advice.advice_steps == steps)
}
