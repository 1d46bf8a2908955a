use cartable::domain::classify;

#[test]
fn given_known_folder_when_classifying_then_returns_mapped_course_slug() {
    assert_eq!(
        classify("1. Intro au droit public et droit constitutionnel"),
        "l1-droit-constitutionnel"
    );
    assert_eq!(
        classify("11. Droit pénal et procédure pénale"),
        "l2-droit-penal"
    );
    assert_eq!(classify("18. TGLF"), "crfpa-tglf");
}

#[test]
fn given_legacy_unnumbered_folder_when_classifying_then_maps_to_same_course() {
    assert_eq!(
        classify("Introduction au droit public et droit constitutionnel"),
        "l1-droit-constitutionnel"
    );
}

#[test]
fn given_folder_differing_only_by_case_when_classifying_then_misses_the_table() {
    // Lookup is verbatim, no normalization.
    assert_eq!(classify("18. tglf"), "18-tglf");
}

#[test]
fn given_unknown_folder_when_classifying_then_derives_fallback_slug() {
    assert_eq!(classify("99. Unknown Subject"), "99-unknown-subject");
}

#[test]
fn given_unknown_accented_folder_when_classifying_then_accents_survive() {
    // The fallback only lowercases and rewrites spaces and periods; it does
    // not transliterate. Accents are dealt with later, when the resolver
    // sanitizes the base id.
    assert_eq!(classify("Été"), "été");
    assert_eq!(classify("Cours d'été 2024"), "cours-d'été-2024");
}

#[test]
fn given_long_unknown_folder_when_classifying_then_truncates_to_fifty_characters() {
    let folder = "a very long folder name that keeps going well past the cutoff point";
    let fallback = classify(folder);
    assert_eq!(fallback.chars().count(), 50);
    assert!(fallback.starts_with("a-very-long-folder-name"));
}
