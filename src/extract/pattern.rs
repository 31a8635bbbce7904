use crate::app::PathMatcher;
use once_cell::sync::Lazy;
use regex::Regex;

/// Rewrite rules applied in order to a serialized matcher to recover the literal
/// prefix it consumes. The serialized form is the framework's `/pattern/flags`
/// text, so the rules deal with escaped separators, capture groups for `:name`
/// parameters, the trailing boundary lookahead, and the flag suffix.
static RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // leading anchor: `/^\/` -> `/`
        (r"^/\^\\/", "/"),
        // trailing boundary lookahead: `\/?(?=\/|$)` -> ``
        (r"\\/\?\(\?=\\/\|\$\)", ""),
        // parameter capture groups (escaped form) -> `:param`
        (r"\(\?:\(\[\^\\/\]\+\?\)\)", ":param"),
        (r"\(\[\^\\/\]\+\?\)", ":param"),
        // unescape separators: `\/` -> `/`
        (r"\\/", "/"),
        // drop any remaining escapes
        (r"\\", ""),
        // wildcard capture: `(.*)` -> `*`
        (r"\(\.\*\)", "*"),
        // optional groups: `?(...)` -> ``
        (r"\?\(.*?\)", ""),
        // case-insensitivity flag suffix
        (r"/i$", ""),
        // collapse doubled separators
        (r"//", "/"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let regex = Regex::new(pattern).expect("prefix recovery rule failed to compile");
        (regex, replacement)
    })
    .collect()
});

/// Characters that should not survive a successful recovery. Anything left over
/// means the matcher was not one of the known prefix shapes.
const RESIDUE: &[char] = &['(', ')', '[', ']', '^', '$', '|', '\\', '?', '+'];

/// Reverse-engineer the literal path prefix a compiled matcher consumes.
///
/// The framework's match-any root matcher is recognized explicitly and yields an
/// empty prefix; running it through the general rules would produce garbage.
/// Returns `None` when the serialized form is not an anchored prefix matcher or
/// when the rules leave unresolved pattern residue — callers then fall back to
/// the layer's literal path field, or leave the prefix unchanged.
pub fn recover_prefix(matcher: &PathMatcher) -> Option<String> {
    if matcher.is_match_any() {
        return Some(String::new());
    }

    let source = matcher.source();
    if !source.starts_with("/^") {
        return None;
    }

    let mut text = source.to_string();
    for (regex, replacement) in RULES.iter() {
        text = regex.replace_all(&text, *replacement).into_owned();
    }

    if text.contains(RESIDUE) {
        return None;
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recover(source: &str) -> Option<String> {
        recover_prefix(&PathMatcher::new(source))
    }

    #[test]
    fn test_plain_mount_prefix() {
        assert_eq!(recover("/^\\/api\\/?(?=\\/|$)/i").as_deref(), Some("/api"));
    }

    #[test]
    fn test_nested_mount_prefix() {
        assert_eq!(
            recover("/^\\/api\\/v1\\/?(?=\\/|$)/i").as_deref(),
            Some("/api/v1")
        );
    }

    #[test]
    fn test_parameter_mount_prefix() {
        assert_eq!(
            recover("/^\\/users\\/(?:([^\\/]+?))\\/?(?=\\/|$)/i").as_deref(),
            Some("/users/:param")
        );
    }

    #[test]
    fn test_match_any_yields_empty_prefix() {
        assert_eq!(recover("/^\\/?(?=\\/|$)/i").as_deref(), Some(""));
        assert_eq!(recover("/^\\/(?=\\/|$)/i").as_deref(), Some(""));
    }

    #[test]
    fn test_unanchored_matcher_fails() {
        assert_eq!(recover("/users/"), None);
    }

    #[test]
    fn test_unknown_shape_fails_instead_of_guessing() {
        // Alternation has no literal prefix to recover.
        assert_eq!(recover("/^\\/(a|b)$/"), None);
    }

    #[test]
    fn test_no_flag_suffix() {
        assert_eq!(recover("/^\\/admin\\/?(?=\\/|$)/").as_deref(), Some("/admin/"));
    }
}
