use super::Element;
use super::props::ElementProps;
use crate::foundation::json::JsonObject;

/// Group of elements with its own timeline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Composition {
    /// Properties shared by every element.
    pub base: ElementProps,
    /// Children, in order.
    pub elements: Vec<Element>,
}

impl Composition {
    /// Composition containing `elements`.
    pub fn new(elements: impl IntoIterator<Item = Element>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.list("elements", &self.elements);
    }
}
