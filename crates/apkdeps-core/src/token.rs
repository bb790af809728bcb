//! Dependency token cleaning.

/// Characters that start a version constraint (`foo>=1.2`, `bar~3`, `!baz`).
const CONSTRAINT_CHARS: [char; 5] = ['~', '<', '>', '=', '!'];

/// Prefixes of tokens that name something other than an installable package:
/// shared libraries, filesystem paths and build tool commands.
const NON_PACKAGE_PREFIXES: [&str; 5] = ["so:", "/", "scanelf", "lddtree", "cmd:"];

/// Reduce a raw `D:` or `p:` token to a bare package name.
///
/// The token is cut at the first version-constraint character. Prefixes that
/// denote non-package references yield `None`, as does a token that is empty
/// once trimmed.
pub fn clean_token(token: &str) -> Option<&str> {
    if token.is_empty() {
        return None;
    }

    let name = match token.find(CONSTRAINT_CHARS) {
        Some(pos) => &token[..pos],
        None => token,
    };

    if NON_PACKAGE_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
    {
        return None;
    }

    let name = name.trim();
    if name.is_empty() { None } else { Some(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_version_constraints() {
        assert_eq!(clean_token("foo>=1.2.3"), Some("foo"));
        assert_eq!(clean_token("musl<2"), Some("musl"));
        assert_eq!(clean_token("busybox~1.36"), Some("busybox"));
        assert_eq!(clean_token("zlib=1.3.1-r0"), Some("zlib"));
        assert_eq!(clean_token("openssl"), Some("openssl"));
    }

    #[test]
    fn conflict_marker_leaves_nothing() {
        // `!pkg` declares a conflict; the prefix before `!` is empty.
        assert_eq!(clean_token("!busybox-extras"), None);
    }

    #[test]
    fn drops_non_package_references() {
        assert_eq!(clean_token("so:libc.musl-x86_64.so.1"), None);
        assert_eq!(clean_token("so:libc.so.6"), None);
        assert_eq!(clean_token("/bin/sh"), None);
        assert_eq!(clean_token("cmd:sh=1.36.1-r0"), None);
        assert_eq!(clean_token("scanelf"), None);
        assert_eq!(clean_token("lddtree>=1"), None);
    }

    #[test]
    fn keeps_other_namespaced_names() {
        assert_eq!(clean_token("pc:zlib>=1.2"), Some("pc:zlib"));
        assert_eq!(clean_token("py3.12:setuptools"), Some("py3.12:setuptools"));
    }

    #[test]
    fn empty_and_blank_tokens() {
        assert_eq!(clean_token(""), None);
        assert_eq!(clean_token("   "), None);
        assert_eq!(clean_token(">=1.0"), None);
        assert_eq!(clean_token(" foo "), Some("foo"));
    }
}
