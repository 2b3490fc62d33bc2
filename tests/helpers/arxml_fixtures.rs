//! Common ARXML fixtures for tests.

/// Wrap package `ELEMENTS` in a 4.x document.
pub fn arxml_v4(package: &str, elements: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<AUTOSAR xmlns="http://autosar.org/schema/r4.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://autosar.org/schema/r4.0 AUTOSAR_4-2-2.xsd">
  <AR-PACKAGES>
    <AR-PACKAGE>
      <SHORT-NAME>{package}</SHORT-NAME>
      <ELEMENTS>
{elements}
      </ELEMENTS>
    </AR-PACKAGE>
  </AR-PACKAGES>
</AUTOSAR>"#
    )
}

/// Wrap package `ELEMENTS` in a 3.x document.
pub fn arxml_v3(package: &str, elements: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<AUTOSAR xmlns="http://autosar.org/3.0.2" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://autosar.org/3.0.2 autosar_3-0-2.xsd">
  <TOP-LEVEL-PACKAGES>
    <AR-PACKAGE>
      <SHORT-NAME>{package}</SHORT-NAME>
      <ELEMENTS>
{elements}
      </ELEMENTS>
    </AR-PACKAGE>
  </TOP-LEVEL-PACKAGES>
</AUTOSAR>"#
    )
}

/// An `R-PORT-PROTOTYPE` with one required ComSpec.
pub fn r_port(name: &str, interface: &str, com_spec: &str) -> String {
    format!(
        "<R-PORT-PROTOTYPE>
           <SHORT-NAME>{name}</SHORT-NAME>
           <REQUIRED-COM-SPECS>{com_spec}</REQUIRED-COM-SPECS>
           <REQUIRED-INTERFACE-TREF DEST=\"SENDER-RECEIVER-INTERFACE\">{interface}</REQUIRED-INTERFACE-TREF>
         </R-PORT-PROTOTYPE>"
    )
}

/// A `P-PORT-PROTOTYPE` with one provided ComSpec.
pub fn p_port(name: &str, interface: &str, com_spec: &str) -> String {
    format!(
        "<P-PORT-PROTOTYPE>
           <SHORT-NAME>{name}</SHORT-NAME>
           <PROVIDED-COM-SPECS>{com_spec}</PROVIDED-COM-SPECS>
           <PROVIDED-INTERFACE-TREF DEST=\"SENDER-RECEIVER-INTERFACE\">{interface}</PROVIDED-INTERFACE-TREF>
         </P-PORT-PROTOTYPE>"
    )
}

/// An application component with the given `PORTS` content and extra children.
pub fn application_swc(tag: &str, name: &str, ports: &str, extra: &str) -> String {
    format!(
        "<{tag}>
           <SHORT-NAME>{name}</SHORT-NAME>
           <PORTS>{ports}</PORTS>
           {extra}
         </{tag}>"
    )
}

pub fn internal_behaviors(names: &[&str]) -> String {
    let behaviors: String = names
        .iter()
        .map(|name| {
            format!(
                "<SWC-INTERNAL-BEHAVIOR><SHORT-NAME>{name}</SHORT-NAME></SWC-INTERNAL-BEHAVIOR>"
            )
        })
        .collect();
    format!("<INTERNAL-BEHAVIORS>{behaviors}</INTERNAL-BEHAVIORS>")
}

pub fn swc_implementation(name: &str, behavior_ref: &str) -> String {
    format!(
        "<SWC-IMPLEMENTATION>
           <SHORT-NAME>{name}</SHORT-NAME>
           <BEHAVIOR-REF DEST=\"SWC-INTERNAL-BEHAVIOR\">{behavior_ref}</BEHAVIOR-REF>
         </SWC-IMPLEMENTATION>"
    )
}

pub const ASSEMBLY_A_TO_B: &str = "
<ASSEMBLY-CONNECTOR-PROTOTYPE>
  <SHORT-NAME>A_to_B</SHORT-NAME>
  <PROVIDER-IREF>
    <COMPONENT-PROTOTYPE-REF>/Pkg/Top/compA</COMPONENT-PROTOTYPE-REF>
    <P-PORT-PROTOTYPE-REF>/Pkg/SwcA/pOut</P-PORT-PROTOTYPE-REF>
  </PROVIDER-IREF>
  <REQUESTER-IREF>
    <COMPONENT-PROTOTYPE-REF>/Pkg/Top/compB</COMPONENT-PROTOTYPE-REF>
    <R-PORT-PROTOTYPE-REF>/Pkg/SwcB/rIn</R-PORT-PROTOTYPE-REF>
  </REQUESTER-IREF>
</ASSEMBLY-CONNECTOR-PROTOTYPE>";

pub const DELEGATION_B_OUT: &str = "
<DELEGATION-CONNECTOR-PROTOTYPE>
  <SHORT-NAME>B_out</SHORT-NAME>
  <INNER-PORT-IREF>
    <COMPONENT-PROTOTYPE-REF>/Pkg/Top/compB</COMPONENT-PROTOTYPE-REF>
    <PORT-PROTOTYPE-REF>/Pkg/SwcB/pStatus</PORT-PROTOTYPE-REF>
  </INNER-PORT-IREF>
  <OUTER-PORT-REF>/Pkg/Top/status</OUTER-PORT-REF>
</DELEGATION-CONNECTOR-PROTOTYPE>";

/// A composition with two prototypes and the given connectors.
pub fn composition(name: &str, connectors: &str, extra: &str) -> String {
    format!(
        "<COMPOSITION-TYPE>
           <SHORT-NAME>{name}</SHORT-NAME>
           <PORTS/>
           <COMPONENTS>
             <COMPONENT-PROTOTYPE><SHORT-NAME>compA</SHORT-NAME><TYPE-TREF DEST=\"APPLICATION-SOFTWARE-COMPONENT-TYPE\">/Pkg/SwcA</TYPE-TREF></COMPONENT-PROTOTYPE>
             <COMPONENT-PROTOTYPE><SHORT-NAME>compB</SHORT-NAME><TYPE-TREF DEST=\"APPLICATION-SOFTWARE-COMPONENT-TYPE\">/Pkg/SwcB</TYPE-TREF></COMPONENT-PROTOTYPE>
           </COMPONENTS>
           <CONNECTORS>{connectors}</CONNECTORS>
           {extra}
         </COMPOSITION-TYPE>"
    )
}
