//! Parser Tests - Compositions, prototypes and connectors

use arxml::ParseError;
use arxml::base::SchemaVersion;
use arxml::model::Connector;
use rstest::rstest;

use crate::helpers::arxml_fixtures::{ASSEMBLY_A_TO_B, DELEGATION_B_OUT, composition};
use crate::helpers::parse_helpers::{component, parse_component};

#[test]
fn test_prototypes_keep_type_refs() {
    let top = component(&composition("Top", "", ""), SchemaVersion::V3_0);
    let body = top.composition().unwrap();
    assert_eq!(body.components.len(), 2);
    assert_eq!(body.component("compA").unwrap().type_ref, "/Pkg/SwcA");
    assert_eq!(body.component("compB").unwrap().type_ref, "/Pkg/SwcB");
    assert!(body.connectors.is_empty());
}

#[test]
fn test_assembly_connector_endpoints() {
    let top = component(&composition("Top", ASSEMBLY_A_TO_B, ""), SchemaVersion::V3_0);
    let body = top.composition().unwrap();
    let assembly: Vec<_> = body.assembly_connectors().collect();
    assert_eq!(assembly.len(), 1);

    let connector = assembly[0];
    assert_eq!(connector.name, "A_to_B");
    assert_eq!(connector.provider.component_ref, "/Pkg/Top/compA");
    assert_eq!(connector.provider.port_ref, "/Pkg/SwcA/pOut");
    assert_eq!(connector.requester.component_ref, "/Pkg/Top/compB");
    assert_eq!(connector.requester.port_ref, "/Pkg/SwcB/rIn");
}

#[test]
fn test_delegation_connector_endpoints() {
    let top = component(&composition("Top", DELEGATION_B_OUT, ""), SchemaVersion::V3_0);
    let delegation = top.composition().unwrap().delegation_connectors().next().unwrap().clone();
    assert_eq!(delegation.inner.component_ref, "/Pkg/Top/compB");
    assert_eq!(delegation.inner.port_ref, "/Pkg/SwcB/pStatus");
    assert_eq!(delegation.outer_port_ref, "/Pkg/Top/status");
}

#[rstest]
#[case(&[ASSEMBLY_A_TO_B, DELEGATION_B_OUT], &["A_to_B", "B_out"])]
#[case(&[DELEGATION_B_OUT, ASSEMBLY_A_TO_B], &["B_out", "A_to_B"])]
fn test_connectors_in_document_order(#[case] connectors: &[&str], #[case] expected: &[&str]) {
    let top = component(&composition("Top", &connectors.concat(), ""), SchemaVersion::V3_0);
    let names: Vec<_> = top
        .composition()
        .unwrap()
        .connectors
        .iter()
        .map(Connector::name)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_duplicate_connectors_are_appended() {
    let connectors = [ASSEMBLY_A_TO_B, ASSEMBLY_A_TO_B].concat();
    let top = component(&composition("Top", &connectors, ""), SchemaVersion::V3_0);
    assert_eq!(top.composition().unwrap().connectors.len(), 2);
}

#[rstest]
#[case("<PASS-THROUGH-CONNECTOR-PROTOTYPE><SHORT-NAME>P</SHORT-NAME></PASS-THROUGH-CONNECTOR-PROTOTYPE>")]
#[case("<ASSEMBLY-SW-CONNECTOR><SHORT-NAME>A</SHORT-NAME></ASSEMBLY-SW-CONNECTOR>")]
fn test_unknown_connector_is_fatal(#[case] connector: &str) {
    let (result, _) = parse_component(&composition("Top", connector, ""), SchemaVersion::V3_0);
    assert!(matches!(result, Err(ParseError::UnsupportedElement { .. })));
}

#[test]
fn test_assembly_without_requester_is_fatal() {
    let connector = "<ASSEMBLY-CONNECTOR-PROTOTYPE>
        <SHORT-NAME>Half</SHORT-NAME>
        <PROVIDER-IREF>
          <COMPONENT-PROTOTYPE-REF>/Pkg/Top/compA</COMPONENT-PROTOTYPE-REF>
          <P-PORT-PROTOTYPE-REF>/Pkg/SwcA/pOut</P-PORT-PROTOTYPE-REF>
        </PROVIDER-IREF>
      </ASSEMBLY-CONNECTOR-PROTOTYPE>";
    let (result, _) = parse_component(&composition("Top", connector, ""), SchemaVersion::V3_0);
    assert!(matches!(
        result,
        Err(ParseError::MissingElement { path, .. }) if path == "REQUESTER-IREF/COMPONENT-PROTOTYPE-REF"
    ));
}

#[test]
fn test_composition_ports() {
    let xml = "<COMPOSITION-TYPE>
        <SHORT-NAME>Top</SHORT-NAME>
        <PORTS>
          <P-PORT-PROTOTYPE>
            <SHORT-NAME>status</SHORT-NAME>
            <PROVIDED-INTERFACE-TREF>/If/Status</PROVIDED-INTERFACE-TREF>
          </P-PORT-PROTOTYPE>
        </PORTS>
      </COMPOSITION-TYPE>";
    let top = component(xml, SchemaVersion::V3_0);
    assert!(top.kind.is_composition());
    assert_eq!(top.provide_ports[0].parent.as_ref().unwrap().as_str(), "/Pkg/Top");
}
