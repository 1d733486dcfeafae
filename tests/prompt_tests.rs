// Prompt composition tests

use invoicelens::prompt::{compose, Language, INVOICE_INSTRUCTION};
use proptest::prelude::*;

#[test]
fn test_prompt_sections_in_order() {
    let prompt = compose("List every line item", Language::German);

    let instruction_pos = prompt.find(INVOICE_INSTRUCTION).unwrap();
    let language_pos = prompt.find("Answer in German.").unwrap();
    let query_pos = prompt.find("User Query: List every line item").unwrap();

    assert!(instruction_pos < language_pos);
    assert!(language_pos < query_pos);
}

#[test]
fn test_spanish_total_scenario() {
    // valid image + "What is the total?" + Spanish
    let prompt = compose("What is the total?", Language::Spanish);
    assert!(prompt.ends_with("Answer in Spanish.\nUser Query: What is the total?"));
}

#[test]
fn test_language_name_is_exact() {
    for language in Language::ALL {
        let prompt = compose("q", language);
        assert!(prompt.contains(&format!("\nAnswer in {}.\n", language.name())));
    }
}

proptest! {
    // The prompt always starts with the instruction, carries the language
    // directive, and ends with the query verbatim - for any query text,
    // including empty and newline-riddled ones.
    #[test]
    fn prop_prompt_shape_holds_for_any_query(
        query in ".*",
        language_index in 0usize..Language::ALL.len(),
    ) {
        let language = Language::ALL[language_index];
        let prompt = compose(&query, language);

        let directive = format!("\nAnswer in {}.\n", language.name());
        let query_suffix = format!("User Query: {}", query);

        prop_assert!(prompt.starts_with(INVOICE_INSTRUCTION));
        prop_assert!(prompt.contains(&directive));
        prop_assert!(prompt.ends_with(&query_suffix));
    }

    #[test]
    fn prop_prompt_length_is_exact(query in ".*") {
        // No truncation or escaping anywhere in the composition.
        let prompt = compose(&query, Language::English);
        let overhead = compose("", Language::English).len();
        prop_assert_eq!(prompt.len(), overhead + query.len());
    }
}
