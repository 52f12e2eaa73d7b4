//! Naming helpers shared by value objects and render contexts.

/// Convert to kebab-case.
///
/// | Input | Output |
/// |-------|--------|
/// | "issueOtp" | "issue-otp" |
/// | "shared_kernel" | "shared-kernel" |
/// | " get  profile " | "get-profile" |
pub fn to_kebab(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut pending_sep = false;
    let mut prev: Option<char> = None;

    for c in s.trim().chars() {
        if c == '_' || c.is_whitespace() {
            pending_sep = true;
            continue;
        }
        if pending_sep {
            out.push('-');
            pending_sep = false;
        } else if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('-');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    out
}

/// Kebab-case with every non-alphanumeric character dropped, suitable as a
/// single Java package segment (`shared-kernel` -> `sharedkernel`).
pub fn to_package_safe(s: &str) -> String {
    to_kebab(s)
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// `com.acme.bff` -> `com/acme/bff`.
pub fn package_to_path(pkg: &str) -> String {
    pkg.trim().replace('.', "/")
}

/// Convert to PascalCase (`get-profile` -> `GetProfile`, `login` -> `Login`).
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split on `_`, `-`, whitespace, camelCase transitions and acronym
/// boundaries (`HTTPServer` -> `http`, `server`). Words come back lowercase.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_handles_camel_and_separators() {
        assert_eq!(to_kebab("issueOtp"), "issue-otp");
        assert_eq!(to_kebab("shared_kernel"), "shared-kernel");
        assert_eq!(to_kebab("  get   profile "), "get-profile");
        assert_eq!(to_kebab("v2Api"), "v2-api");
        assert_eq!(to_kebab("already-kebab"), "already-kebab");
    }

    #[test]
    fn package_safe_strips_everything_but_alnum() {
        assert_eq!(to_package_safe("shared-kernel"), "sharedkernel");
        assert_eq!(to_package_safe("issueOtp"), "issueotp");
        assert_eq!(to_package_safe("a.b$c"), "abc");
    }

    #[test]
    fn package_path() {
        assert_eq!(package_to_path("com.acme.bff"), "com/acme/bff");
    }

    #[test]
    fn pascal_case() {
        assert_eq!(to_pascal_case("getprofile"), "Getprofile");
        assert_eq!(to_pascal_case("get-profile"), "GetProfile");
        assert_eq!(to_pascal_case("issueOtp"), "IssueOtp");
        assert_eq!(to_pascal_case("HTTPRequest"), "HttpRequest");
    }
}
