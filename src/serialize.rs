use std::io::Write;

use indextree::{NodeEdge, NodeId};

use crate::document::Document;
use crate::entity::{serialize_attribute, serialize_text};
use crate::error::Error;
use crate::xmlvalue::Value;

impl Document {
    /// Serialize the document to a writer.
    pub fn serialize(&self, w: &mut impl Write) -> Result<(), Error> {
        if let Some(declaration) = &self.declaration {
            write!(w, "<?xml version=\"{}\"", declaration.version)?;
            if declaration.encoding.is_some() {
                // serialized output is always UTF-8, whatever the input declared
                write!(w, " encoding=\"UTF-8\"")?;
            }
            if let Some(standalone) = declaration.standalone {
                write!(
                    w,
                    " standalone=\"{}\"",
                    if standalone { "yes" } else { "no" }
                )?;
            }
            writeln!(w, "?>")?;
        }
        for edge in self.root.get().traverse(&self.arena) {
            match edge {
                NodeEdge::Start(node_id) => {
                    self.handle_edge_start(node_id, w)?;
                }
                NodeEdge::End(node_id) => {
                    self.handle_edge_end(node_id, w)?;
                }
            }
        }
        Ok(())
    }

    /// Serialize the document to a string.
    pub fn serialize_to_string(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.serialize(&mut buf)?;
        Ok(String::from_utf8(buf).expect("serialized XML is valid UTF-8"))
    }

    fn handle_edge_start(&self, node_id: NodeId, w: &mut impl Write) -> Result<(), Error> {
        match self.arena[node_id].get() {
            Value::Root => {}
            Value::Element(element) => {
                write!(w, "<{}", self.name_str(element.name()))?;
                for (name_id, value) in element.attributes() {
                    write!(
                        w,
                        " {}=\"{}\"",
                        self.name_str(*name_id),
                        serialize_attribute(value.as_str().into())
                    )?;
                }
                if node_id.children(&self.arena).next().is_none() {
                    write!(w, "/>")?;
                } else {
                    write!(w, ">")?;
                }
            }
            Value::Text(text) => {
                write!(w, "{}", serialize_text(text.get().into()))?;
            }
            Value::Comment(comment) => {
                write!(w, "<!--{}-->", comment.get())?;
            }
            Value::ProcessingInstruction(pi) => match pi.data() {
                Some(data) => write!(w, "<?{} {}?>", pi.target(), data)?,
                None => write!(w, "<?{}?>", pi.target())?,
            },
        }
        Ok(())
    }

    fn handle_edge_end(&self, node_id: NodeId, w: &mut impl Write) -> Result<(), Error> {
        if let Value::Element(element) = self.arena[node_id].get() {
            if node_id.children(&self.arena).next().is_some() {
                write!(w, "</{}>", self.name_str(element.name()))?;
            }
        }
        Ok(())
    }
}
