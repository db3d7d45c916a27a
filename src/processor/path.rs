//! Path strings as they appear in include registrations and generated code.

/// Forward slashes only, no runs of separators.
///
/// Idempotent; any run of mixed `\` and `/` collapses to a single `/`.
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

/// `base + "/" + tail`, normalized.
pub fn join(base: &str, tail: &str) -> String {
    normalize(&format!("{base}/{tail}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslashes_become_forward() {
        assert_eq!(normalize(r"C:\Urho3D\include"), "C:/Urho3D/include");
    }

    #[test]
    fn test_doubled_separators_collapse() {
        assert_eq!(normalize("/opt//urho///bin"), "/opt/urho/bin");
        assert_eq!(normalize(r"a\\b/\c"), "a/b/c");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "/",
            "////",
            "already/normal/path.cpp",
            r"C:\\mixed//seps\\\x.h",
            "trailing///",
            "no_separators",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
            assert!(!once.contains('\\'));
            assert!(!once.contains("//"));
        }
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_join_normalizes() {
        assert_eq!(join("/opt/urho/", "bin"), "/opt/urho/bin");
        assert_eq!(join("", "bin"), "/bin");
    }
}
