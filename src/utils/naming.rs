//! Name derivation rules for package directories
//!
//! Component source files carry PascalCase names; package directories use
//! the kebab-cased form joined onto the library name with a dot.

/// Convert an ASCII identifier to kebab-case.
///
/// Word boundaries follow the lodash rules the original packaging scripts
/// relied on: a lowercase-to-uppercase transition, the last capital of an
/// acronym run followed by a lowercase letter, and any transition between
/// letters and digits all start a new word. Non-alphanumeric characters are
/// treated as separators and dropped.
///
/// `HomeIcon` becomes `home-icon`, `HTTPServer2` becomes `http-server-2`.
pub fn kebab_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();

        let boundary = match prev {
            None => false,
            Some(p) => {
                let upper_after_lower = c.is_ascii_uppercase() && p.is_ascii_lowercase();
                // "HTTPServer": break before the 'S' that starts "Server"
                let acronym_end = c.is_ascii_uppercase()
                    && p.is_ascii_uppercase()
                    && next.is_some_and(|n| n.is_ascii_lowercase());
                let digit_edge = c.is_ascii_digit() != p.is_ascii_digit()
                    && p.is_ascii_alphanumeric();
                upper_after_lower || acronym_end || digit_edge
            }
        };

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c.to_ascii_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words.join("-")
}

/// Derive a package directory name from the library name and an optional
/// component name.
///
/// Empty segments are dropped, so the main package keeps the bare library
/// name while component packages become `<library>.<kebab-component>`.
pub fn package_dir_name(library: &str, component: Option<&str>) -> String {
    let mut segments: Vec<String> = Vec::new();
    if !library.is_empty() {
        segments.push(library.to_string());
    }
    if let Some(name) = component {
        let kebab = kebab_case(name);
        if !kebab.is_empty() {
            segments.push(kebab);
        }
    }
    segments.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_pascal() {
        assert_eq!(kebab_case("HomeIcon"), "home-icon");
        assert_eq!(kebab_case("ExampleCard"), "example-card");
        assert_eq!(kebab_case("Button"), "button");
    }

    #[test]
    fn test_kebab_case_acronyms_and_digits() {
        assert_eq!(kebab_case("HTTPServer"), "http-server");
        assert_eq!(kebab_case("HTTPServer2"), "http-server-2");
        assert_eq!(kebab_case("Grid2Col"), "grid-2-col");
        assert_eq!(kebab_case("V2"), "v-2");
    }

    #[test]
    fn test_kebab_case_separators() {
        assert_eq!(kebab_case("already-kebab"), "already-kebab");
        assert_eq!(kebab_case("snake_case_name"), "snake-case-name");
        assert_eq!(kebab_case(""), "");
    }

    #[test]
    fn test_package_dir_name() {
        assert_eq!(
            package_dir_name("vuetify-lib-test-lib", None),
            "vuetify-lib-test-lib"
        );
        assert_eq!(
            package_dir_name("vuetify-lib-test-lib", Some("HomeIcon")),
            "vuetify-lib-test-lib.home-icon"
        );
        assert_eq!(package_dir_name("", Some("HomeIcon")), "home-icon");
    }
}
