//! Page Document Module
//! In-memory model of the server-rendered page: element lookup by id,
//! class queries, `data-*` attributes, and element removal.
//!
//! Only the parts of the page this crate consumes are modeled. Real markup
//! can be ingested with [`Document::from_html`]; tests assemble pages
//! directly from [`Element`] values.

use std::collections::HashMap;

/// Stable handle to one element in a [`Document`].
///
/// Handles stay valid after other elements are removed; a handle to a
/// removed element simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// One page element: optional id, class list, and `data-*` attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    id: Option<String>,
    classes: Vec<String>,
    data: HashMap<String, String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element's `id` attribute.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Append one class to the class list.
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Set a `data-*` attribute by its name without the `data-` prefix.
    pub fn with_data_attr(mut self, name: &str, value: &str) -> Self {
        self.data.insert(name.to_string(), value.to_string());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// In-memory page: owns elements in document order and hands out stable
/// [`ElementId`] handles.
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Option<Element>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document model from server-rendered HTML.
    ///
    /// Keeps element ids, class lists, and `data-*` attributes; everything
    /// else (text, nesting, styling) is irrelevant to this crate and
    /// dropped.
    pub fn from_html(html: &str) -> Self {
        let parsed = scraper::Html::parse_document(html);
        let mut document = Self::new();
        for node in parsed.tree.nodes() {
            let Some(el) = node.value().as_element() else {
                continue;
            };
            let mut element = Element::new();
            if let Some(id) = el.id() {
                element.id = Some(id.to_string());
            }
            for class in el.classes() {
                element.classes.push(class.to_string());
            }
            for (name, value) in el.attrs() {
                if let Some(key) = name.strip_prefix("data-") {
                    element.data.insert(key.to_string(), value.to_string());
                }
            }
            document.push(element);
        }
        document
    }

    /// Insert an element, returning its handle.
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(Some(element));
        ElementId(self.elements.len() - 1)
    }

    /// First element with the given `id` attribute, if present.
    pub fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|slot| {
                slot.as_ref().and_then(|el| el.id.as_deref()) == Some(id)
            })
            .map(ElementId)
    }

    /// All elements whose class list contains `class`, in document order.
    pub fn elements_by_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.as_ref().is_some_and(|el| el.has_class(class)))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    /// Read a `data-*` attribute (by its name without the `data-` prefix).
    pub fn data_attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id)?.data.get(name).map(String::as_str)
    }

    /// Whether the element is still part of the document.
    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// Remove an element from the document. Removing an element that is
    /// already gone is a no-op.
    pub fn remove(&mut self, id: ElementId) {
        if let Some(slot) = self.elements.get_mut(id.0) {
            *slot = None;
        }
    }

    /// Number of elements still present.
    pub fn len(&self) -> usize {
        self.elements.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)?.as_ref()
    }
}
