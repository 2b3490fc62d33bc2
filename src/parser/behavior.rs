//! Internal-behavior collaborator.
//!
//! The component parser hands each `SWC-INTERNAL-BEHAVIOR` to a
//! [`BehaviorParser`]. [`SwcBehaviorParser`] reads just enough for
//! implementation linking and runnable listings; a fuller behavior model
//! can be plugged in through the trait.

use super::helpers::{optional_text, short_name};
use crate::base::RefPath;
use crate::error::Result;
use crate::model::{InternalBehavior, RunnableEntity};
use crate::xml::XmlElement;

/// Parses one internal behavior owned by `component`.
pub trait BehaviorParser {
    fn parse_internal_behavior(
        &self,
        elem: &XmlElement,
        component: &RefPath,
    ) -> Result<InternalBehavior>;
}

/// Default behavior parser: name, multiple-instantiation flag, runnables.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwcBehaviorParser;

impl BehaviorParser for SwcBehaviorParser {
    fn parse_internal_behavior(
        &self,
        elem: &XmlElement,
        component: &RefPath,
    ) -> Result<InternalBehavior> {
        let mut behavior = InternalBehavior::new(short_name(elem)?, component.clone());
        behavior.multiple_instance =
            elem.text_at("SUPPORTS-MULTIPLE-INSTANTIATION") == Some("true");

        for runnable in elem.find_all("RUNNABLES/RUNNABLE-ENTITY") {
            behavior.runnables.push(RunnableEntity {
                name: short_name(runnable)?,
                symbol: optional_text(runnable, "SYMBOL"),
            });
        }
        Ok(behavior)
    }
}

impl<F> BehaviorParser for F
where
    F: Fn(&XmlElement, &RefPath) -> Result<InternalBehavior>,
{
    fn parse_internal_behavior(
        &self,
        elem: &XmlElement,
        component: &RefPath,
    ) -> Result<InternalBehavior> {
        self(elem, component)
    }
}
