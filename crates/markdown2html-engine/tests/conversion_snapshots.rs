use markdown2html_engine::{ConvertOptions, Converter, convert_str};
use pretty_assertions::assert_eq;

#[test]
fn fixture_holberton_readme() {
    assert_fixture("holberton_readme");
}

#[test]
fn fixture_mixed_blocks() {
    assert_fixture("mixed_blocks");
}

#[test]
fn fixture_directives() {
    assert_fixture("directives");
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str) {
    let md = read_fixture(name);
    let html = convert_str(&md);
    insta::assert_snapshot!(name, html);
}

/// Streaming through a reader/writer pair yields the same bytes as the
/// in-memory conversion, for every fixture.
#[test]
fn streaming_matches_in_memory_for_fixtures() {
    for name in ["holberton_readme", "mixed_blocks", "directives"] {
        let md = read_fixture(name);
        let mut out = Vec::new();
        Converter::new(ConvertOptions::default())
            .convert(md.as_bytes(), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), convert_str(&md), "{name}");
    }
}

#[test]
fn conversion_is_deterministic() {
    let md = read_fixture("mixed_blocks");
    assert_eq!(convert_str(&md), convert_str(&md));
}

/// Every tag opened by the converter is closed, except the unordered list
/// left open at end of input.
#[test]
fn ordered_lists_and_paragraphs_are_balanced() {
    for name in ["holberton_readme", "mixed_blocks", "directives"] {
        let html = convert_str(&read_fixture(name));
        for (open, close) in [("<ol>", "</ol>"), ("<p>", "</p>")] {
            assert_eq!(
                html.matches(open).count(),
                html.matches(close).count(),
                "{name}: {open}"
            );
        }
    }
}
