//! Top-level dispatch per schema version.

use arxml::base::{RefPath, SchemaVersion};
use arxml::parser::{ComponentTypeParser, Dispatch, ElementTag, ParsedElement};
use arxml::xml::XmlDocument;
use rstest::rstest;

use crate::helpers::arxml_fixtures::{application_swc, composition, swc_implementation};

fn dispatch(xml: &str, version: SchemaVersion) -> Dispatch {
    let doc = XmlDocument::parse_str(xml).unwrap();
    let mut parser = ComponentTypeParser::new(version);
    let mut workspace = arxml::Workspace::new();
    parser
        .parse_element(doc.root(), Some(&RefPath::from("/Pkg")), Some(&mut workspace))
        .unwrap()
}

#[rstest]
#[case(SchemaVersion::V3_0, "APPLICATION-SOFTWARE-COMPONENT-TYPE", true)]
#[case(SchemaVersion::V3_0, "COMPLEX-DEVICE-DRIVER-COMPONENT-TYPE", true)]
#[case(SchemaVersion::V3_0, "SERVICE-COMPONENT-TYPE", true)]
#[case(SchemaVersion::V3_0, "CALPRM-COMPONENT-TYPE", true)]
#[case(SchemaVersion::V3_0, "APPLICATION-SW-COMPONENT-TYPE", false)]
#[case(SchemaVersion::V4_0, "APPLICATION-SW-COMPONENT-TYPE", true)]
#[case(SchemaVersion::V4_0, "APPLICATION-SOFTWARE-COMPONENT-TYPE", false)]
#[case(SchemaVersion::V4_0, "COMPLEX-DEVICE-DRIVER-COMPONENT-TYPE", false)]
#[case(SchemaVersion::new(4, 2, 2), "APPLICATION-SW-COMPONENT-TYPE", true)]
fn test_atomic_tag_vocabulary(#[case] version: SchemaVersion, #[case] tag: &str, #[case] handled: bool) {
    let result = dispatch(&application_swc(tag, "Swc", "", ""), version);
    match result {
        Dispatch::Handled(ParsedElement::Component(swc)) => {
            assert!(handled, "{tag} should not be handled in {version}");
            assert_eq!(swc.ref_path(), "/Pkg/Swc");
        }
        Dispatch::Handled(other) => panic!("unexpected element {other:?}"),
        Dispatch::NotSupported => assert!(!handled, "{tag} should be handled in {version}"),
    }
}

#[test]
fn test_composition_only_in_v3() {
    let xml = composition("Top", "", "");
    assert!(matches!(
        dispatch(&xml, SchemaVersion::V3_0),
        Dispatch::Handled(ParsedElement::Component(ref c)) if c.kind.is_composition()
    ));
    assert_eq!(dispatch(&xml, SchemaVersion::V4_0), Dispatch::NotSupported);
}

#[rstest]
#[case(SchemaVersion::V3_0)]
#[case(SchemaVersion::V4_0)]
fn test_implementation_in_both_versions(#[case] version: SchemaVersion) {
    let result = dispatch(&swc_implementation("Impl", "/Pkg/Swc/IB"), version);
    let Dispatch::Handled(ParsedElement::Implementation(implementation)) = &result else {
        panic!("expected implementation, got {result:?}");
    };
    assert_eq!(implementation.ref_path(), "/Pkg/Impl");
}

#[test]
fn test_supported_tags_listing() {
    assert_eq!(ElementTag::supported_tags(SchemaVersion::V4_0).len(), 2);
    assert_eq!(ElementTag::supported_tags(SchemaVersion::V3_0).len(), 6);
}
