use indextree::NodeId;
use xmlparser::{ElementEnd, StrSpan, Token, Tokenizer};

use crate::document::{Document, Node, XmlArena};
use crate::encoding::detect_encoding;
use crate::entity::parse_entities;
use crate::error::Error;
use crate::name::NameLookup;
use crate::xmlvalue::{Comment, Element, ProcessingInstruction, Text, Value};

fn qualified_name(prefix: &StrSpan, local: &StrSpan) -> String {
    if prefix.is_empty() {
        local.as_str().to_string()
    } else {
        format!("{}:{}", prefix.as_str(), local.as_str())
    }
}

struct DocumentBuilder {
    arena: XmlArena,
    name_lookup: NameLookup,
    root: NodeId,
    current: NodeId,
    // element started but attributes still arriving
    pending: Option<Element>,
    declaration: Option<crate::document::Declaration>,
}

impl DocumentBuilder {
    fn new() -> Self {
        let mut arena = XmlArena::new();
        let root = arena.new_node(Value::Root);
        DocumentBuilder {
            arena,
            name_lookup: NameLookup::new(),
            root,
            current: root,
            pending: None,
            declaration: None,
        }
    }

    fn append(&mut self, value: Value) -> NodeId {
        let node_id = self.arena.new_node(value);
        self.current.append(node_id, &mut self.arena);
        node_id
    }

    fn element_start(&mut self, prefix: &StrSpan, local: &StrSpan) {
        let name_id = self
            .name_lookup
            .get_id_mut(qualified_name(prefix, local));
        self.pending = Some(Element::new(name_id));
    }

    fn attribute(
        &mut self,
        prefix: &StrSpan,
        local: &StrSpan,
        value: &StrSpan,
    ) -> Result<(), Error> {
        let name_id = self
            .name_lookup
            .get_id_mut(qualified_name(prefix, local));
        let value = parse_entities(value.as_str().into())?;
        let element = self
            .pending
            .as_mut()
            .expect("attribute token outside element start");
        element.set_attribute(name_id, value);
        Ok(())
    }

    fn open_element(&mut self) {
        let element = self
            .pending
            .take()
            .expect("element end without element start");
        let node_id = self.append(Value::Element(element));
        self.current = node_id;
    }

    fn empty_element(&mut self) {
        let element = self
            .pending
            .take()
            .expect("element end without element start");
        self.append(Value::Element(element));
    }

    fn close_element(&mut self, prefix: &StrSpan, local: &StrSpan) -> Result<(), Error> {
        let name = qualified_name(prefix, local);
        if self.current == self.root {
            return Err(Error::UnexpectedCloseTag(name));
        }
        let matches = match self.arena[self.current].get() {
            Value::Element(element) => self.name_lookup.get_value(element.name()) == &name,
            _ => false,
        };
        if !matches {
            return Err(Error::UnexpectedCloseTag(name));
        }
        // the parent of an open element is never removed
        self.current = self.arena[self.current]
            .parent()
            .expect("open element without parent");
        Ok(())
    }

    fn text(&mut self, text: &StrSpan) -> Result<(), Error> {
        let text = parse_entities(text.as_str().into())?;
        self.append(Value::Text(Text::new(text.into_owned())));
        Ok(())
    }

    fn cdata(&mut self, text: &StrSpan) {
        self.append(Value::Text(Text::new(text.as_str().to_string())));
    }

    fn comment(&mut self, text: &StrSpan) {
        self.append(Value::Comment(Comment::new(text.as_str().to_string())));
    }

    fn processing_instruction(&mut self, target: &StrSpan, content: Option<&StrSpan>) {
        self.append(Value::ProcessingInstruction(ProcessingInstruction::new(
            target.as_str().to_string(),
            content.map(|c| c.as_str().to_string()),
        )));
    }

    fn declaration(
        &mut self,
        version: &StrSpan,
        encoding: Option<&StrSpan>,
        standalone: Option<bool>,
    ) {
        self.declaration = Some(crate::document::Declaration {
            version: version.as_str().to_string(),
            encoding: encoding.map(|e| e.as_str().to_string()),
            standalone,
        });
    }

    fn finish(self) -> Result<Document, Error> {
        if self.current != self.root {
            let name = match self.arena[self.current].get() {
                Value::Element(element) => {
                    self.name_lookup.get_value(element.name()).clone()
                }
                _ => String::new(),
            };
            return Err(Error::UnclosedTag(name));
        }
        let document = Document {
            arena: self.arena,
            name_lookup: self.name_lookup,
            root: Node::new(self.root),
            declaration: self.declaration,
        };
        let has_document_element = document
            .children(document.root())
            .any(|node| document.element(node).is_some());
        if !has_document_element {
            return Err(Error::NoDocumentElement);
        }
        Ok(document)
    }
}

impl Document {
    /// Parse an XML string into a document tree.
    pub fn parse(xml: &str) -> Result<Document, Error> {
        use Token::*;

        let mut builder = DocumentBuilder::new();
        for token in Tokenizer::from(xml) {
            match token? {
                Declaration {
                    version,
                    encoding,
                    standalone,
                    ..
                } => {
                    builder.declaration(&version, encoding.as_ref(), standalone);
                }
                ElementStart { prefix, local, .. } => {
                    builder.element_start(&prefix, &local);
                }
                Attribute {
                    prefix,
                    local,
                    value,
                    ..
                } => {
                    builder.attribute(&prefix, &local, &value)?;
                }
                ElementEnd { end, .. } => match end {
                    self::ElementEnd::Open => builder.open_element(),
                    self::ElementEnd::Empty => builder.empty_element(),
                    self::ElementEnd::Close(prefix, local) => {
                        builder.close_element(&prefix, &local)?;
                    }
                },
                Text { text } => {
                    builder.text(&text)?;
                }
                Cdata { text, .. } => {
                    builder.cdata(&text);
                }
                Comment { text, .. } => {
                    builder.comment(&text);
                }
                ProcessingInstruction {
                    target, content, ..
                } => {
                    builder.processing_instruction(&target, content.as_ref());
                }
                // doctype declarations are not represented in the tree
                DtdStart { .. } | EmptyDtd { .. } | EntityDeclaration { .. } | DtdEnd { .. } => {}
            }
        }
        builder.finish()
    }

    /// Parse raw document bytes, decoding them first. The encoding is
    /// taken from a BOM or the declared charset, defaulting to UTF-8.
    pub fn parse_bytes(data: &[u8]) -> Result<Document, Error> {
        let encoding = detect_encoding(data)
            .ok_or_else(|| Error::UnsupportedEncoding("unknown".to_string()))?;
        let (text, _, had_errors) = encoding.decode(data);
        if had_errors {
            return Err(Error::UnsupportedEncoding(encoding.name().to_string()));
        }
        Document::parse(&text)
    }
}
