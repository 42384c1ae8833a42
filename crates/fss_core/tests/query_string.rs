use fss_core::{
    build_query_string, cwd_href, download_query, navigation_query, ParseAs, QueryKind,
    DEFAULT_QUERY_KINDS,
};

#[test]
fn default_kinds_produce_one_pair_each_in_order() {
    assert_eq!(
        build_query_string(&DEFAULT_QUERY_KINDS),
        "query=cwd&query=list&query=plugins"
    );
}

#[test]
fn pairs_preserve_input_order_and_count() {
    let kinds = [QueryKind::Plugins, QueryKind::List, QueryKind::Plugins];
    let query = build_query_string(&kinds);
    let pairs: Vec<&str> = query.split('&').collect();

    assert_eq!(pairs.len(), kinds.len());
    for (pair, kind) in pairs.iter().zip(kinds) {
        assert_eq!(*pair, format!("query={kind}"));
    }
}

#[test]
fn empty_kind_set_gives_empty_query() {
    assert_eq!(build_query_string(&[]), "");
    assert_eq!(navigation_query(Some("/"), &[]), "cwd=%2F");
}

#[test]
fn navigation_query_sets_cwd_before_queries() {
    assert_eq!(
        navigation_query(Some("/home/my docs"), &[QueryKind::List]),
        "cwd=%2Fhome%2Fmy+docs&query=list"
    );
    assert_eq!(navigation_query(None, &[QueryKind::Cwd]), "query=cwd");
}

#[test]
fn download_query_encodes_path() {
    assert_eq!(download_query("notes/a&b.txt"), "download=notes%2Fa%26b.txt");
}

#[test]
fn cwd_links_keep_separators_and_escape_query_syntax() {
    assert_eq!(cwd_href("/a/x"), "?cwd=/a/x");
    assert_eq!(cwd_href("/srv/v1.2_final~"), "?cwd=/srv/v1.2_final~");
    assert_eq!(cwd_href("/a/c++ 50%"), "?cwd=/a/c%2B%2B%2050%25");
    assert_eq!(cwd_href("/x&y#z?"), "?cwd=/x%26y%23z%3F");
    assert_eq!(cwd_href("/café"), "?cwd=/caf%C3%A9");
}

#[test]
fn parse_mode_follows_extension_unless_overridden() {
    assert_eq!(ParseAs::for_download("foo.json", None), ParseAs::Json);
    assert_eq!(ParseAs::for_download("foo.txt", None), ParseAs::Text);
    assert_eq!(ParseAs::for_download("foo.txt", Some(ParseAs::Json)), ParseAs::Json);
    assert_eq!(ParseAs::for_download("foo.json", Some(ParseAs::Text)), ParseAs::Text);
}

#[test]
fn parse_mode_parses_case_insensitively() {
    assert_eq!("JSON".parse::<ParseAs>().unwrap(), ParseAs::Json);
    assert_eq!("text".parse::<ParseAs>().unwrap(), ParseAs::Text);
    assert!("yaml".parse::<ParseAs>().is_err());
}
