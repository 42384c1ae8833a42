use crate::cwd_href;

/// One clickable ancestor link in the listing header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Link target, `?cwd=<cumulative path>`.
    pub href: String,
}

/// `/` stays as-is; any other root gets exactly one trailing separator.
pub fn normalize_root(root: &str) -> String {
    if root == "/" || root.ends_with('/') {
        root.to_string()
    } else {
        format!("{root}/")
    }
}

/// Folds the non-empty segments of `root` into links to each cumulative path.
///
/// The filesystem root itself is not a crumb; `/` yields an empty list.
pub fn breadcrumbs(root: &str) -> Vec<Crumb> {
    root.split('/')
        .filter(|segment| !segment.is_empty())
        .scan(String::new(), |url, segment| {
            url.push('/');
            url.push_str(segment);
            Some(Crumb {
                label: segment.to_string(),
                href: cwd_href(url.as_str()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_appends_single_separator() {
        assert_eq!(normalize_root("/"), "/");
        assert_eq!(normalize_root("/a/b"), "/a/b/");
        assert_eq!(normalize_root("/a/b/"), "/a/b/");
    }

    #[test]
    fn repeated_separators_do_not_create_empty_crumbs() {
        let crumbs = breadcrumbs("//a//b/");
        let hrefs: Vec<_> = crumbs.iter().map(|c| c.href.as_str()).collect();
        assert_eq!(hrefs, ["?cwd=/a", "?cwd=/a/b"]);
    }

    #[test]
    fn crumb_links_encode_segment_text() {
        let crumbs = breadcrumbs("/my docs/c++");
        assert_eq!(crumbs[0].label, "my docs");
        assert_eq!(crumbs[1].href, "?cwd=/my%20docs/c%2B%2B");
    }
}
