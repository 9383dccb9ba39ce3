//! English inflection for resource names: "articles" -> "article", "people" -> "person".
//! Only the last word of a compound name is inflected ("order_items" -> "order_item").

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "news",
    "data",
    "media",
    "alias",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("analyses", "analysis"),
    ("criteria", "criterion"),
    ("quizzes", "quiz"),
    ("movies", "movie"),
    ("knives", "knife"),
    ("lives", "life"),
    ("wives", "wife"),
    ("heroes", "hero"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("echoes", "echo"),
    ("statuses", "status"),
    ("buses", "bus"),
    ("viruses", "virus"),
    ("aliases", "alias"),
];

/// Suffix rewrites tried in order; the first matching suffix wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ss", "ss"),
    ("us", "us"),
    ("is", "is"),
    ("ies", "y"),
    ("lves", "lf"),
    ("rves", "rf"),
    ("sses", "ss"),
    ("xes", "x"),
    ("zzes", "zz"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("s", ""),
];

/// Singularize a resource name. Words that do not look plural are returned unchanged.
pub fn singularize(word: &str) -> String {
    let split = word.rfind(['_', '-', '/']).map(|i| i + 1).unwrap_or(0);
    let (prefix, last) = word.split_at(split);
    let mut out = String::with_capacity(word.len());
    out.push_str(prefix);
    out.push_str(&singularize_word(last));
    out
}

fn singularize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == lower) {
        return match_case(word, singular);
    }
    for (suffix, replacement) in SUFFIX_RULES {
        if lower.len() > suffix.len() && lower.ends_with(suffix) {
            if let Some(stem) = word.get(..word.len().saturating_sub(suffix.len())) {
                return format!("{}{}", stem, replacement);
            }
        }
    }
    word.to_string()
}

/// Carry a leading capital over from the original word.
fn match_case(original: &str, replacement: &str) -> String {
    let capitalized = original.chars().next().map(char::is_uppercase).unwrap_or(false);
    if !capitalized {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
