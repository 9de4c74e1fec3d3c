use crate::name::NameId;

/// The type of an XML node.
///
/// Use this when you care about the kind of node without matching on
/// [`Value`] itself.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document root that holds everything. Note that this is not the
    /// same as the document element.
    Root,
    /// Element; has a name and attributes.
    Element,
    /// Text.
    Text,
    /// Processing instruction.
    ProcessingInstruction,
    /// Comment.
    Comment,
}

/// An XML value.
///
/// Access it through [`Document::value`](crate::Document::value) or
/// mutably through [`Document::value_mut`](crate::Document::value_mut).
#[derive(Debug, Clone)]
pub enum Value {
    /// Document root that holds everything. Note that this is not the
    /// same as the document element.
    Root,
    /// Element; has a name and attributes.
    Element(Element),
    /// Text.
    Text(Text),
    /// Processing instruction.
    ProcessingInstruction(ProcessingInstruction),
    /// Comment.
    Comment(Comment),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Root => ValueType::Root,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Comment(_) => ValueType::Comment,
            Value::ProcessingInstruction(_) => ValueType::ProcessingInstruction,
        }
    }
}

/// XML element value.
///
/// Example: `<foo/>` or `<foo bar="baz"/>`.
///
/// Attributes keep their document order; overwriting an existing
/// attribute keeps its position, new attributes go at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) name_id: NameId,
    pub(crate) attributes: Vec<(NameId, String)>,
}

impl Element {
    pub(crate) fn new(name_id: NameId) -> Self {
        Element {
            name_id,
            attributes: Vec::new(),
        }
    }

    /// The name of the element.
    pub fn name(&self) -> NameId {
        self.name_id
    }

    /// The attributes of the element, in document order.
    pub fn attributes(&self) -> &[(NameId, String)] {
        &self.attributes
    }

    /// Get an attribute by name.
    pub fn get_attribute(&self, name_id: NameId) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(id, _)| *id == name_id)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute value, overwriting in place if it exists.
    pub fn set_attribute<S: Into<String>>(&mut self, name_id: NameId, value: S) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(id, _)| *id == name_id) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name_id, value)),
        }
    }
}

/// XML text value.
///
/// Example: `Bar` in `<foo>Bar</foo>`.
#[derive(Debug, Clone)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }
}

/// XML comment.
///
/// Example: `<!-- foo -->`.
#[derive(Debug, Clone)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }
}

/// XML processing instruction value.
///
/// Example: `<?foo?>` or `<?foo bar?>`.
#[derive(Debug, Clone)]
pub struct ProcessingInstruction {
    pub(crate) target: String,
    pub(crate) data: Option<String>,
}

impl ProcessingInstruction {
    pub(crate) fn new(target: String, data: Option<String>) -> Self {
        ProcessingInstruction { target, data }
    }

    /// Get processing instruction target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Get processing instruction data.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}
