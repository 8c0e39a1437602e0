//! Source language detection from file names.

/// Language name used when neither file reveals one
pub const GENERIC_LANGUAGE: &str = "Generic";

/// Request value that asks for detection instead of naming a language
pub const AUTO_LANGUAGE: &str = "Auto";

/// Guess the language of a file from its extension.
///
/// Only the text after the last dot counts, compared case-insensitively. Names
/// without an extension, dotfiles like `.bashrc` and names ending in a dot give
/// `None`.
pub fn guess_language(file_name: &str) -> Option<&'static str> {
    let dot = file_name.rfind('.')?;
    if dot == 0 || dot == file_name.len() - 1 {
        return None;
    }

    let language = match file_name[dot + 1..].to_ascii_lowercase().as_str() {
        "py" => "Python",
        "cs" => "C#",
        "java" => "Java",
        "kt" => "Kotlin",
        "js" | "mjs" | "jsx" => "JavaScript",
        "ts" | "tsx" => "TypeScript",
        "cpp" | "cc" | "cxx" => "C++",
        "h" => "C/C++ Header",
        "hpp" => "C++ Header",
        "c" => "C",
        "go" => "Go",
        "rs" => "Rust",
        "php" => "PHP",
        "rb" => "Ruby",
        "swift" => "Swift",
        "scala" => "Scala",
        "sql" => "SQL",
        "sh" => "Shell",
        "ps1" => "PowerShell",
        "lua" => "Lua",
        _ => return None,
    };
    Some(language)
}

/// Pick the language to name in the prompt.
///
/// An explicit request wins unless it is blank or `Auto`. Otherwise the new
/// file's extension is tried before the old file's.
pub fn resolve_language(
    requested: Option<&str>,
    before_name: Option<&str>,
    after_name: Option<&str>,
) -> String {
    if let Some(requested) = requested.map(str::trim) {
        if !requested.is_empty() && !requested.eq_ignore_ascii_case(AUTO_LANGUAGE) {
            return requested.to_string();
        }
    }

    after_name
        .and_then(guess_language)
        .or_else(|| before_name.and_then(guess_language))
        .unwrap_or(GENERIC_LANGUAGE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(guess_language("main.rs"), Some("Rust"));
        assert_eq!(guess_language("App.java"), Some("Java"));
        assert_eq!(guess_language("index.tsx"), Some("TypeScript"));
        assert_eq!(guess_language("module.mjs"), Some("JavaScript"));
        assert_eq!(guess_language("engine.cxx"), Some("C++"));
        assert_eq!(guess_language("types.h"), Some("C/C++ Header"));
        assert_eq!(guess_language("deploy.ps1"), Some("PowerShell"));
    }

    #[test]
    fn test_extension_case_and_last_dot() {
        assert_eq!(guess_language("SCRIPT.PY"), Some("Python"));
        assert_eq!(guess_language("archive.tar.go"), Some("Go"));
    }

    #[test]
    fn test_unrecognised_names() {
        assert_eq!(guess_language("Makefile"), None);
        assert_eq!(guess_language(".bashrc"), None);
        assert_eq!(guess_language("notes."), None);
        assert_eq!(guess_language("notes.txt"), None);
        assert_eq!(guess_language(""), None);
    }

    #[test]
    fn test_resolve_prefers_explicit_request() {
        assert_eq!(resolve_language(Some(" Haskell "), Some("a.rs"), Some("b.rs")), "Haskell");
    }

    #[test]
    fn test_resolve_auto_detects() {
        assert_eq!(resolve_language(Some("auto"), Some("a.py"), Some("b.rs")), "Rust");
        assert_eq!(resolve_language(Some(""), Some("a.py"), Some("b.txt")), "Python");
        assert_eq!(resolve_language(None, None, Some("b.go")), "Go");
        assert_eq!(resolve_language(None, Some("a.txt"), None), GENERIC_LANGUAGE);
        assert_eq!(resolve_language(None, None, None), GENERIC_LANGUAGE);
    }
}
