//! Component type building: variants, behaviors, unhandled children.

use arxml::ParseError;
use arxml::base::SchemaVersion;
use arxml::model::ComponentKind;
use arxml::parser::{DiagnosticCode, Severity};
use rstest::rstest;

use crate::helpers::arxml_fixtures::{application_swc, internal_behaviors, composition, r_port};
use crate::helpers::parse_helpers::{codes, component, parse_component};

// ============================================================================
// Variants
// ============================================================================

#[rstest]
#[case("APPLICATION-SW-COMPONENT-TYPE", ComponentKind::Application)]
#[case("APPLICATION-SOFTWARE-COMPONENT-TYPE", ComponentKind::Application)]
#[case("COMPLEX-DEVICE-DRIVER-COMPONENT-TYPE", ComponentKind::ComplexDeviceDriver)]
#[case("SERVICE-COMPONENT-TYPE", ComponentKind::Service)]
#[case("CALPRM-COMPONENT-TYPE", ComponentKind::Parameter)]
fn test_atomic_variant_by_tag(#[case] tag: &str, #[case] kind: ComponentKind) {
    let swc = component(&application_swc(tag, "Swc", "", ""), SchemaVersion::V3_0);
    assert_eq!(swc.kind, kind);
    assert_eq!(swc.name, "Swc");
    assert_eq!(swc.ref_path(), "/Pkg/Swc");
}

#[test]
fn test_unknown_component_tag_is_fatal() {
    let (result, _) = parse_component(
        "<SENSOR-ACTUATOR-SW-COMPONENT-TYPE><SHORT-NAME>S</SHORT-NAME></SENSOR-ACTUATOR-SW-COMPONENT-TYPE>",
        SchemaVersion::V4_0,
    );
    assert!(matches!(result, Err(ParseError::UnsupportedElement { .. })));
}

#[test]
fn test_missing_short_name_is_fatal() {
    let (result, _) = parse_component(
        "<APPLICATION-SW-COMPONENT-TYPE><PORTS/></APPLICATION-SW-COMPONENT-TYPE>",
        SchemaVersion::V4_0,
    );
    assert!(matches!(result, Err(ParseError::MissingElement { path, .. }) if path == "SHORT-NAME"));
}

// ============================================================================
// Internal behaviors
// ============================================================================

#[rstest]
#[case(&[], None)]
#[case(&["Swc_IB"], Some("/Pkg/Swc/Swc_IB"))]
fn test_zero_or_one_behavior_succeeds(#[case] names: &[&str], #[case] expected: Option<&str>) {
    let xml = application_swc(
        "APPLICATION-SW-COMPONENT-TYPE",
        "Swc",
        "",
        &internal_behaviors(names),
    );
    let swc = component(&xml, SchemaVersion::V4_0);
    let path = swc.behavior.as_ref().map(|b| b.ref_path());
    assert_eq!(path.as_ref().map(|p| p.as_str()), expected);
}

#[test]
fn test_two_behaviors_fail() {
    let xml = application_swc(
        "APPLICATION-SW-COMPONENT-TYPE",
        "Swc",
        "",
        &internal_behaviors(&["IB1", "IB2"]),
    );
    let (result, _) = parse_component(&xml, SchemaVersion::V4_0);
    let err = result.unwrap_err();
    assert!(matches!(&err, ParseError::MultipleInternalBehaviors { component } if component == "/Pkg/Swc"));
    assert_eq!(err.to_string(), "/Pkg/Swc: an SWC cannot have multiple internal behaviors");
}

#[test]
fn test_default_behavior_parser_reads_runnables() {
    let behaviors = "<INTERNAL-BEHAVIORS>
        <SWC-INTERNAL-BEHAVIOR>
          <SHORT-NAME>Swc_IB</SHORT-NAME>
          <RUNNABLES>
            <RUNNABLE-ENTITY><SHORT-NAME>Run10ms</SHORT-NAME><SYMBOL>Swc_Run10ms</SYMBOL></RUNNABLE-ENTITY>
          </RUNNABLES>
        </SWC-INTERNAL-BEHAVIOR>
      </INTERNAL-BEHAVIORS>";
    let xml = application_swc("APPLICATION-SW-COMPONENT-TYPE", "Swc", "", behaviors);
    let behavior = component(&xml, SchemaVersion::V4_0).behavior.unwrap();
    assert_eq!(behavior.component_ref, "/Pkg/Swc");
    assert_eq!(behavior.runnables[0].name, "Run10ms");
    assert!(!behavior.multiple_instance);
}

// ============================================================================
// Unhandled children: lenient for atomic components, strict for compositions
// ============================================================================

#[test]
fn test_unknown_child_of_atomic_component_is_skipped() {
    let xml = application_swc(
        "APPLICATION-SW-COMPONENT-TYPE",
        "Swc",
        &r_port("In", "/If/A", ""),
        "<SWC-DOCUMENTATION><P>not modelled</P></SWC-DOCUMENTATION>",
    );
    let (result, diagnostics) = parse_component(&xml, SchemaVersion::V4_0);
    let swc = result.unwrap();
    assert_eq!(swc.require_ports.len(), 1);
    assert_eq!(codes(&diagnostics), vec![DiagnosticCode::UnhandledTag]);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert!(diagnostics[0].message.contains("SWC-DOCUMENTATION"));
}

#[test]
fn test_unknown_child_of_composition_is_fatal() {
    let xml = composition(
        "Top",
        "",
        "<SWC-DOCUMENTATION><P>not modelled</P></SWC-DOCUMENTATION>",
    );
    let (result, _) = parse_component(&xml, SchemaVersion::V3_0);
    assert!(matches!(
        result,
        Err(ParseError::UnsupportedElement { tag, .. }) if tag == "SWC-DOCUMENTATION"
    ));
}

#[test]
fn test_unknown_port_kind_is_skipped() {
    let ports = "<PR-PORT-PROTOTYPE><SHORT-NAME>Both</SHORT-NAME></PR-PORT-PROTOTYPE>";
    let xml = application_swc("APPLICATION-SW-COMPONENT-TYPE", "Swc", ports, "");
    let (result, diagnostics) = parse_component(&xml, SchemaVersion::V4_0);
    let swc = result.unwrap();
    assert!(swc.find_port("Both").is_none());
    assert_eq!(codes(&diagnostics), vec![DiagnosticCode::UnhandledTag]);
}
