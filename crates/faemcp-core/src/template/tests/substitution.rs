//! Substitution tests

use super::helpers::bindings;
use super::*;

#[test]
fn test_substitute_adjacent_placeholders() {
    let text = substitute("{{a:d1}}{{b:d2}}", &bindings(&[("a", "X"), ("b", "Y")])).unwrap();
    assert_eq!(text, "XY");
}

#[test]
fn test_substitute_keeps_surrounding_text() {
    let text = substitute(
        "# Title\n\n{{ctx:Context}}\n\nEnd.",
        &bindings(&[("ctx", "the context")]),
    )
    .unwrap();
    assert_eq!(text, "# Title\n\nthe context\n\nEnd.");
}

#[test]
fn test_substitute_missing_variable() {
    let err = substitute("{{a:d}}", &Bindings::new()).unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingVariable {
            name: "a".to_string(),
            line: 1,
        }
    );
}

#[test]
fn test_substitute_missing_variable_reports_first_and_line() {
    let err = substitute(
        "{{a:x}}\n\n{{b:y}}\n{{c:z}}",
        &bindings(&[("a", "1")]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingVariable {
            name: "b".to_string(),
            line: 3,
        }
    );
}

#[test]
fn test_substitute_repeated_name_same_value() {
    let text = substitute("{{x:first}}-{{x:second}}", &bindings(&[("x", "v")])).unwrap();
    assert_eq!(text, "v-v");
}

#[test]
fn test_substitute_ignores_description() {
    let b = bindings(&[("a", "value")]);
    let short = substitute("[{{a:ignored-desc}}]", &b).unwrap();
    let long = substitute("[{{a:a completely\ndifferent description}}]", &b).unwrap();
    assert_eq!(short, "[value]");
    assert_eq!(short, long);
}

#[test]
fn test_substitute_empty_description_matches_described() {
    let b = bindings(&[("a", "X")]);
    let described = substitute("{{a:ignored-desc}}", &b).unwrap();
    let empty = substitute("{{a:}}", &b).unwrap();
    assert_eq!(described, "X");
    assert_eq!(empty, described);
}

#[test]
fn test_substitute_empty_description_still_requires_binding() {
    let err = substitute("{{a:}}", &Bindings::new()).unwrap_err();
    assert_eq!(
        err,
        TemplateError::MissingVariable {
            name: "a".to_string(),
            line: 1,
        }
    );
}

#[test]
fn test_substitute_value_is_verbatim() {
    let text = substitute(
        "{{a:x}} and {{b:y}}",
        &bindings(&[("a", "{{b:sneaky}}"), ("b", "}}{{")]),
    )
    .unwrap();
    assert_eq!(text, "{{b:sneaky}} and }}{{");
}

#[test]
fn test_substitute_empty_value() {
    let text = substitute("<{{a:x}}>", &bindings(&[("a", "")])).unwrap();
    assert_eq!(text, "<>");
}

#[test]
fn test_substitute_extra_bindings_are_ignored() {
    let text = substitute("{{a:x}}", &bindings(&[("a", "1"), ("unused", "2")])).unwrap();
    assert_eq!(text, "1");
}

#[test]
fn test_substitute_text_without_placeholders() {
    let text = substitute("plain {{text}} {x:y}", &Bindings::new()).unwrap();
    assert_eq!(text, "plain {{text}} {x:y}");
}

#[test]
fn test_substitute_trims_name_before_lookup() {
    let text = substitute("{{ a :d}}", &bindings(&[("a", "ok")])).unwrap();
    assert_eq!(text, "ok");
}

#[test]
fn test_substitute_multibyte_values() {
    let text = substitute("→ {{w:word}} ←", &bindings(&[("w", "日本語")])).unwrap();
    assert_eq!(text, "→ 日本語 ←");
}

#[test]
fn test_substitute_leaves_no_placeholder_behind() {
    let template = "{{context:c}}\n{{goals:g}}\n{{query:q}}";
    let text = substitute(
        template,
        &bindings(&[("context", "C"), ("goals", "G"), ("query", "Q")]),
    )
    .unwrap();
    assert_eq!(text, "C\nG\nQ");
    assert_eq!(
        crate::template::scan::PlaceholderScan::new(&text).count(),
        0
    );
}
