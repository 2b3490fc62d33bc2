pub mod arxml_fixtures;
pub mod parse_helpers;
