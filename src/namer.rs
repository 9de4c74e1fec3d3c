use ahash::{HashMap, HashSet};

use crate::document::Document;
use crate::name::NameId;

/// The naming pass: assigns `name="<tag> <counter>"` to elements whose
/// tag is in the allow-list.
///
/// Counters are per tag and start fresh for every document, so a
/// `Namer` can be reused across any number of files.
pub struct Namer {
    tags: HashSet<String>,
    treat_tags_without_name_attribute: bool,
    start_counting_from: i64,
}

impl Namer {
    pub fn new<I, S>(
        tags: I,
        treat_tags_without_name_attribute: bool,
        start_counting_from: i64,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Namer {
            tags: tags.into_iter().map(Into::into).collect(),
            treat_tags_without_name_attribute,
            start_counting_from,
        }
    }

    /// Assign `name` attributes to all eligible elements of a document,
    /// in document (pre-order) order. Returns how many elements were
    /// renamed.
    ///
    /// An element is eligible if its tag is in the allow-list and it
    /// either already has a `name` attribute or
    /// `treat_tags_without_name_attribute` is set. Per tag, counters
    /// count up from `start_counting_from` without gaps.
    pub fn assign(&self, document: &mut Document) -> usize {
        let name_attr = document.add_name("name");
        let nodes: Vec<_> = document.descendants(document.root()).collect();
        let mut counts_by_tag: HashMap<NameId, i64> = HashMap::default();
        let mut assigned = 0;
        for node in nodes {
            let (tag_id, tag) = match document.element(node) {
                Some(element) => {
                    let tag = document.name_str(element.name());
                    if !self.tags.contains(tag) {
                        continue;
                    }
                    if !self.treat_tags_without_name_attribute
                        && element.get_attribute(name_attr).is_none()
                    {
                        continue;
                    }
                    (element.name(), tag.to_string())
                }
                None => continue,
            };
            let count = counts_by_tag
                .get(&tag_id)
                .copied()
                .unwrap_or(self.start_counting_from - 1)
                + 1;
            counts_by_tag.insert(tag_id, count);
            let element = document
                .element_mut(node)
                .expect("node was an element above");
            element.set_attribute(name_attr, format!("{} {}", tag, count));
            assigned += 1;
        }
        assigned
    }
}
