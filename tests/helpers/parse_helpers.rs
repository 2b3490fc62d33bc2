//! Parse helpers shared by the parser tests.

use arxml::base::{RefPath, SchemaVersion};
use arxml::model::{ComSpec, ComponentType};
use arxml::parser::{ComponentTypeParser, Diagnostic, DiagnosticCode};
use arxml::xml::XmlDocument;

/// Package every top-level element is parsed into.
pub const PACKAGE: &str = "/Pkg";

/// Parse one top-level component element.
pub fn parse_component(
    xml: &str,
    version: SchemaVersion,
) -> (arxml::Result<ComponentType>, Vec<Diagnostic>) {
    let doc = XmlDocument::parse_str(xml).expect("fixture should be well-formed XML");
    let mut parser = ComponentTypeParser::new(version);
    let result = parser.parse_component_type(doc.root(), Some(&RefPath::from(PACKAGE)));
    (result, parser.take_diagnostics())
}

/// Parse a component that must succeed.
pub fn component(xml: &str, version: SchemaVersion) -> ComponentType {
    let (result, _) = parse_component(xml, version);
    result.unwrap_or_else(|e| panic!("expected component to parse, got: {e}"))
}

/// The only ComSpec of the only port of `swc`.
pub fn single_com_spec(swc: &ComponentType) -> &ComSpec {
    let port = swc
        .require_ports
        .iter()
        .chain(swc.provide_ports.iter())
        .next()
        .expect("component should have a port");
    assert_eq!(port.com_specs.len(), 1, "expected exactly one ComSpec on {}", port.name);
    &port.com_specs[0]
}

pub fn codes(diagnostics: &[Diagnostic]) -> Vec<DiagnosticCode> {
    diagnostics.iter().map(|d| d.code).collect()
}
