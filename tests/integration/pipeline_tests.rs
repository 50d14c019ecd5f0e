//! Post-processing pipeline tests
//!
//! Exercise masking, moderation, and formatting through the public API.

#[cfg(test)]
mod tests {
    use roast_gateway::core::roast::{
        CENSORED_NOTE, EMPTY_CONTENT_MESSAGE, RoastError, RoastPostProcessor, TextNormalizer,
    };
    use roast_gateway::core::security::{
        BannedTermSet, ContentGate, DEFAULT_BANNED_TERMS, ModerationReason, TermMasker,
    };
    use std::sync::Arc;

    // ==================== Masking ====================

    #[test]
    fn test_each_term_masks_in_any_casing_and_context() {
        for term in DEFAULT_BANNED_TERMS {
            let masker = TermMasker::new(Arc::new(BannedTermSet::new([*term]).unwrap()));
            let shouted = term.to_uppercase();
            let input = format!("before {} after", shouted);
            let expected = format!("before {} after", "*".repeat(term.chars().count()));
            assert_eq!(masker.sanitize(&input), expected, "term {:?}", term);
        }
    }

    #[test]
    fn test_masking_is_idempotent_and_bounds_newlines() {
        let masker = TermMasker::default();
        assert_eq!(masker.sanitize(""), "");

        let once = masker.sanitize("Nice smile\n\n\n\n\nGreat   \nvibes  ");
        assert_eq!(once, "Nice smile\n\nGreat\nvibes");
        assert_eq!(masker.sanitize(&once), once);
        assert!(!once.contains("\n\n\n"));
    }

    // ==================== Gate ====================

    #[test]
    fn test_gate_examples() {
        let gate = ContentGate::default();

        let flagged = gate.evaluate("this is Rand behavior");
        assert!(!flagged.ok);
        assert_eq!(flagged.reason, Some(ModerationReason::BannedTerm));
        assert_eq!(
            serde_json::to_value(&flagged).unwrap()["reason"],
            "BANNED_TERM"
        );

        assert!(gate.evaluate("totally fine text").ok);
    }

    // ==================== Formatting ====================

    #[test]
    fn test_formatter_examples() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.format("- item one\n- item two"),
            "• item one.\n• item two"
        );
        assert_eq!(normalizer.format(""), "");
    }

    // ==================== End to end ====================

    #[test]
    fn test_process_masks_without_note() {
        let processor = RoastPostProcessor::default();
        let roast = processor
            .process("You look like asshole today\n\nGreat hair though")
            .unwrap();

        assert_eq!(
            roast.final_text,
            "You look like ******* today\n\nGreat hair though"
        );
        assert!(roast.moderation.ok);
        assert!(!roast.final_text.contains("(Note:"));
    }

    #[test]
    fn test_process_blank_input_fails() {
        let err = RoastPostProcessor::default().process("   ").unwrap_err();
        assert_eq!(err, RoastError::EmptyContent);
        assert_eq!(err.to_string(), EMPTY_CONTENT_MESSAGE);
    }

    #[test]
    fn test_process_bullet_roast() {
        let roast = RoastPostProcessor::default()
            .process("* Hair like a thunderstorm\n* Smile brighter than 1000 suns\n")
            .unwrap();
        assert_eq!(
            roast.final_text,
            "• Hair like a thunderstorm.\n• Smile brighter than 1000 suns"
        );
    }

    #[test]
    fn test_term_created_by_masking_appends_note() {
        // Masking "y" leaves a literal "x*" behind for the gate to find
        let terms = Arc::new(BannedTermSet::new(["x*", "y"]).unwrap());
        let roast = RoastPostProcessor::new(terms)
            .process("Spot the xy\nwow")
            .unwrap();

        assert!(!roast.moderation.ok);
        assert!(roast.final_text.ends_with(CENSORED_NOTE.trim()));
    }

    #[test]
    fn test_additional_terms_follow_builtins() {
        let terms = Arc::new(BannedTermSet::builtin_with(["bozo"]).unwrap());
        assert_eq!(terms.len(), DEFAULT_BANNED_TERMS.len() + 1);

        let roast = RoastPostProcessor::new(terms)
            .process("Absolute BOZO energy")
            .unwrap();
        assert_eq!(roast.final_text, "Absolute **** energy");
        assert!(roast.moderation.ok);
    }
}
