//! End-to-end property scenarios: construction, escaping, preferred
//! parameter mapping, and folding.

use super::fixtures::LONG_VALUE;
use crate::rfc::vcard::core::{DocumentSettings, PropertyRequest, VCardProperty, VCardVersion};

fn create<'a>(
    doc: &'a DocumentSettings,
    name: &str,
    request: PropertyRequest,
) -> VCardProperty<'a> {
    VCardProperty::create(doc, name, request).expect("property should build")
}

/// Returns the value block of a rendered line.
fn value_block(prop: &VCardProperty<'_>) -> String {
    let rendered = prop.render();
    rendered
        .split_once(':')
        .map(|(_, value)| value.to_string())
        .unwrap_or_default()
}

// ============================================================================
// Construction and rendering
// ============================================================================

#[test_log::test]
fn grouped_email_renders() {
    let doc = DocumentSettings::default();
    let prop = create(
        &doc,
        "item1.email",
        PropertyRequest::new()
            .value("joe@strummer.com")
            .param("type", "uri"),
    );

    assert_eq!(prop.render(), "item1.EMAIL;TYPE=uri:joe@strummer.com");
    assert_eq!(prop.to_string(), prop.render());
}

#[test]
fn structured_address_value_block() {
    let doc = DocumentSettings::default();
    let prop = create(
        &doc,
        "adr",
        PropertyRequest::new().values(["", "", "Street\nApt 1", "City", "State", "Zip", "Country"]),
    );

    assert_eq!(value_block(&prop), ";;Street\\nApt 1;City;State;Zip;Country");
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn newlines_are_escaped() {
    let doc = DocumentSettings::default();
    for input in ["Line1\nLine2", "Line1\\nLine2", "Line1\r\nLine2"] {
        let prop = create(&doc, "note", PropertyRequest::new().value(input));
        assert_eq!(value_block(&prop), "Line1\\nLine2", "{input:?}");
        assert_eq!(prop.render().lines().count(), 1);
    }
}

#[test]
fn semicolons_are_escaped_once() {
    let doc = DocumentSettings::default();
    for input in ["Line1;Line2", "Line1\\;Line2"] {
        let prop = create(&doc, "note", PropertyRequest::new().value(input));
        assert_eq!(value_block(&prop), "Line1\\;Line2", "{input:?}");
    }
}

#[test]
fn commas_are_escaped_once() {
    let doc = DocumentSettings::default();
    for input in ["Line1,Line2", "Line1\\,Line2"] {
        let prop = create(&doc, "note", PropertyRequest::new().value(input));
        assert_eq!(value_block(&prop), "Line1\\,Line2", "{input:?}");
    }
}

#[test]
fn backslashes_are_escaped_once() {
    let doc = DocumentSettings::default();
    for input in ["Line1\\Line2", "Line1\\\\Line2"] {
        let prop = create(&doc, "note", PropertyRequest::new().value(input));
        assert_eq!(value_block(&prop), "Line1\\\\Line2", "{input:?}");
    }
}

// ============================================================================
// Preferred parameter
// ============================================================================

#[test]
fn preferred_maps_per_version() {
    let v3 = DocumentSettings::unfolded(VCardVersion::V3);
    let v4 = DocumentSettings::unfolded(VCardVersion::V4);

    for (name, value) in [("type", "pref"), ("pref", "true"), ("preferred", "yes")] {
        let request = PropertyRequest::new().value("a@b.c").param(name, value);
        assert_eq!(
            create(&v3, "email", request.clone()).render(),
            "EMAIL;TYPE=pref:a@b.c"
        );
        assert_eq!(create(&v4, "email", request).render(), "EMAIL;PREF=1:a@b.c");
    }
}

#[test]
fn unpreferred_is_omitted_on_both_versions() {
    for version in [VCardVersion::V3, VCardVersion::V4] {
        let doc = DocumentSettings::unfolded(version);
        for value in ["false", "0"] {
            let prop = create(
                &doc,
                "email",
                PropertyRequest::new().value("a@b.c").param("pref", value),
            );
            assert!(!prop.render().contains("pref"));
            assert!(!prop.render().contains("PREF"));
        }
    }
}

// ============================================================================
// Folding
// ============================================================================

#[test]
fn folds_at_75_by_default() {
    let doc = DocumentSettings::default();
    let prop = create(
        &doc,
        "item1.email",
        PropertyRequest::new().value(LONG_VALUE).param("type", "uri"),
    );

    let rendered = prop.render();
    assert!(rendered.lines().count() > 1);
    for line in rendered.split('\n') {
        assert!(line.chars().count() <= 75, "{line}");
    }
}

#[test_log::test]
fn folds_at_50() {
    let doc = DocumentSettings::new(VCardVersion::V4, 50).unwrap();
    let prop = create(
        &doc,
        "item1.email",
        PropertyRequest::new().value(LONG_VALUE).param("type", "uri"),
    );

    let rendered = prop.render();
    let lines: Vec<&str> = rendered.split('\n').collect();
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|line| line.chars().count() <= 50));
    assert!(
        lines[1..]
            .iter()
            .all(|line| line.starts_with(' ') && !line.starts_with("  "))
    );
    assert_eq!(
        rendered.replace("\n ", ""),
        format!("item1.EMAIL;TYPE=uri:{LONG_VALUE}")
    );
}

#[test]
fn zero_width_never_folds() {
    let doc = DocumentSettings::unfolded(VCardVersion::V4);
    let prop = create(
        &doc,
        "item1.email",
        PropertyRequest::new().value(LONG_VALUE).param("type", "uri"),
    );

    let expected = format!("item1.EMAIL;TYPE=uri:{LONG_VALUE}");
    assert_eq!(prop.render().split('\n').count(), 1);
    assert_eq!(prop.render(), expected);
}

#[test]
fn fold_width_holds_for_escaped_and_multibyte_values() {
    for width in [2, 5, 13, 40, 75] {
        let doc = DocumentSettings::new(VCardVersion::V3, width).unwrap();
        let prop = create(
            &doc,
            "note",
            PropertyRequest::new()
                .value("Ünïcödé; commas, backslashes \\ and\nnewlines 日本語")
                .param("type", "pref"),
        );

        for line in prop.render().split('\n') {
            assert!(line.chars().count() <= width, "width {width}: {line:?}");
        }
    }
}
