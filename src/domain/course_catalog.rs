use super::slug::truncate_chars;

const MAX_FALLBACK_LEN: usize = 50;

/// Canonical course folder names mapped to course-level slugs.
///
/// Keys are matched verbatim against the first segment of a PDF's path under
/// the content root. The unnumbered "Introduction au droit public..." entry is
/// a legacy alias for folder 1; earlier data carried it with a trailing space,
/// which looked like a data-entry slip and was trimmed when the two script
/// copies of this table were consolidated.
static FOLDER_COURSES: &[(&str, &str)] = &[
    (
        "1. Intro au droit public et droit constitutionnel",
        "l1-droit-constitutionnel",
    ),
    (
        "Introduction au droit public et droit constitutionnel",
        "l1-droit-constitutionnel",
    ),
    (
        "2. Intro au droit et droit des personnes et de la famille",
        "l1-droit-civil",
    ),
    (
        "3. Intro historique au Droit et histoire des institutions",
        "l1-histoire-du-droit",
    ),
    (
        "4. Intro à la science politique et économie politique",
        "l1-science-politique",
    ),
    (
        "5. Droit administratif et institutions administratives",
        "l2-droit-administratif",
    ),
    (
        "6. Institutions européennes et système juridique de l_Union Européenne",
        "l2-droit-europeen",
    ),
    (
        "7. Relations et institutions internationales",
        "l2-relations-internationales",
    ),
    (
        "8. Organisations juridictionnelles et représentations judiciaires",
        "l2-organisations-juridictionnelles",
    ),
    ("9. Droit des obligations (L2)", "l2-droit-des-obligations"),
    ("10. Droit fiscal et finances publiques", "l2-droit-fiscal"),
    ("11. Droit pénal et procédure pénale", "l2-droit-penal"),
    (
        "12. Systèmes juridiques comparés et culture juridique contemporaine",
        "l2-systemes-juridiques",
    ),
    ("13. Droit des affaires", "l3-droit-des-affaires"),
    ("14. Contrats spéciaux", "l3-contrats-speciaux"),
    ("15. Droit des biens", "l3-droit-des-biens"),
    (
        "16. Droit du travail et relations collectives",
        "l3-droit-du-travail",
    ),
    ("17. Procédure civile", "crfpa-procedure-civile"),
    ("18. TGLF", "crfpa-tglf"),
    (
        "19. Droit des obligations CRFPA",
        "crfpa-droit-des-obligations",
    ),
    ("21. Droit civil CRFPA", "crfpa-droit-civil"),
    (
        "22. Droit public et contentieux administratif",
        "crfpa-droit-public",
    ),
    (
        "23. Droit international et européen",
        "crfpa-droit-international",
    ),
];

/// Map a folder name to its course-level base id.
///
/// Unknown folders fall back to a lowercased, hyphenated rendition of the
/// folder name. The fallback deliberately does NOT go through
/// [`sanitize`](super::slug::sanitize): accented characters survive here and
/// are only transliterated when the resolver sanitizes the base id at the
/// final join. Existing stored identifiers depend on that ordering.
pub fn classify(folder_name: &str) -> String {
    for (folder, course) in FOLDER_COURSES {
        if *folder == folder_name {
            return (*course).to_string();
        }
    }

    let fallback = folder_name.to_lowercase().replace(' ', "-").replace('.', "");
    truncate_chars(&fallback, MAX_FALLBACK_LEN).to_string()
}
