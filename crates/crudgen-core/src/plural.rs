//! Singularization of table names.
//!
//! Three layers, checked in order: a non-countable set (words with no
//! distinct plural), an irregular-plural dictionary, and a generic
//! trailing-`s` strip. Both tables are immutable static data; lookup is
//! pure and never fails, and a word that matches nothing is returned
//! unchanged.

/// Words with no distinct plural form. Checked before everything else.
const NON_COUNTABLE: &[&str] = &[
    "audio",
    "bison",
    "chassis",
    "compensation",
    "coreopsis",
    "data",
    "deer",
    "education",
    "emoji",
    "equipment",
    "fish",
    "furniture",
    "gold",
    "information",
    "knowledge",
    "love",
    "rain",
    "money",
    "moose",
    "nutrition",
    "offspring",
    "plankton",
    "pokemon",
    "police",
    "rice",
    "series",
    "sheep",
    "species",
    "swine",
    "traffic",
    "wheat",
];

/// Irregular plural → singular pairs. Lookup is case-insensitive on the
/// plural side and happens only for countable words.
const IRREGULAR: &[(&str, &str)] = &[
    ("are", "is"),
    ("analyses", "analysis"),
    ("alumni", "alumnus"),
    ("aliases", "alias"),
    ("axes", "axis"),
    ("genii", "genius"),
    ("data", "datum"),
    ("atlases", "atlas"),
    ("appendices", "appendix"),
    ("barracks", "barrack"),
    ("beefs", "beef"),
    ("buses", "bus"),
    ("brothers", "brother"),
    ("cafes", "cafe"),
    ("corpuses", "corpus"),
    ("campuses", "campus"),
    ("cows", "cow"),
    ("crises", "crisis"),
    ("ganglions", "ganglion"),
    ("genera", "genus"),
    ("graffiti", "graffito"),
    ("loaves", "loaf"),
    ("matrices", "matrix"),
    ("monies", "money"),
    ("mongooses", "mongoose"),
    ("moves", "move"),
    ("movies", "movie"),
    ("mythoi", "mythos"),
    ("lice", "louse"),
    ("niches", "niche"),
    ("numina", "numen"),
    ("octopuses", "octopus"),
    ("opuses", "opus"),
    ("oxen", "ox"),
    ("penises", "penis"),
    ("vaginas", "vagina"),
    ("vertices", "vertex"),
    ("viruses", "virus"),
    ("shoes", "shoe"),
    ("sexes", "sex"),
    ("testes", "testis"),
    ("turfs", "turf"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("cacti", "cactus"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("news", "news"),
    ("deer", "deer"),
    ("echoes", "echo"),
    ("elves", "elf"),
    ("embargoes", "embargo"),
    ("foes", "foe"),
    ("foci", "focus"),
    ("fungi", "fungus"),
    ("geese", "goose"),
    ("heroes", "hero"),
    ("hooves", "hoof"),
    ("indices", "index"),
    ("knifes", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("men", "man"),
    ("mice", "mouse"),
    ("nuclei", "nucleus"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("potatoes", "potato"),
    ("selves", "self"),
    ("syllabi", "syllabus"),
    ("tomatoes", "tomato"),
    ("torpedoes", "torpedo"),
    ("vetoes", "veto"),
    ("women", "woman"),
    ("zeroes", "zero"),
    ("natives", "native"),
    ("hives", "hive"),
    ("quizzes", "quiz"),
    ("bases", "basis"),
    ("diagnostic", "diagnosis"),
    ("parentheses", "parenthesis"),
    ("prognoses", "prognosis"),
    ("synopses", "synopsis"),
    ("theses", "thesis"),
];

/// Returns the singular form of `word`.
///
/// Non-countable words come back unchanged; irregular plurals come back
/// from the dictionary; anything else longer than two characters loses a
/// trailing `s`. A word that is already a known singular form maps to
/// itself, so repeated application is stable.
#[must_use]
pub fn singularize(word: &str) -> String {
    if !is_countable(word) {
        return word.to_string();
    }
    if let Some(singular) = irregular_singular(&word.to_lowercase()) {
        return singular.to_string();
    }
    if word.len() > 2 && word.ends_with('s') {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Whether `word` has a distinct plural at all (case-insensitive).
fn is_countable(word: &str) -> bool {
    let lower = word.to_lowercase();
    !NON_COUNTABLE.contains(&lower.as_str())
}

/// Dictionary lookup. Plural keys take precedence; known singular forms
/// are fixed points.
fn irregular_singular(word: &str) -> Option<&'static str> {
    IRREGULAR
        .iter()
        .find(|(plural, _)| *plural == word)
        .or_else(|| IRREGULAR.iter().find(|(_, singular)| *singular == word))
        .map(|(_, singular)| *singular)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals_lose_trailing_s() {
        assert_eq!(singularize("apples"), "apple");
        assert_eq!(singularize("doors"), "door");
        assert_eq!(singularize("users"), "user");
    }

    #[test]
    fn irregular_plurals_use_the_dictionary() {
        assert_eq!(singularize("children"), "child");
        assert_eq!(singularize("mice"), "mouse");
        assert_eq!(singularize("indices"), "index");
        assert_eq!(singularize("people"), "person");
    }

    #[test]
    fn dictionary_lookup_is_case_insensitive() {
        assert_eq!(singularize("Children"), "child");
        assert_eq!(singularize("INDICES"), "index");
    }

    #[test]
    fn non_countable_words_are_unchanged() {
        for word in NON_COUNTABLE {
            assert_eq!(singularize(word), *word, "{word}");
        }
    }

    #[test]
    fn non_countable_wins_over_the_dictionary() {
        // "data" appears in both tables; the non-countable set is
        // checked first.
        assert_eq!(singularize("data"), "data");
        assert_eq!(singularize("deer"), "deer");
    }

    #[test]
    fn short_words_are_not_stripped() {
        assert_eq!(singularize("as"), "as");
        assert_eq!(singularize("is"), "is");
    }

    #[test]
    fn singularize_is_idempotent_on_dictionary_entries() {
        for (plural, _) in IRREGULAR {
            let once = singularize(plural);
            assert_eq!(singularize(&once), once, "{plural}");
        }
    }

    #[test]
    fn pascal_case_input_strips_like_any_word() {
        // Table names arrive already identifier-cased from go_ident.
        assert_eq!(singularize("RoleUsers"), "RoleUser");
    }
}
