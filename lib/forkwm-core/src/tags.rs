//! Single character mnemonics for nodes, scoped per workspace root.
//!
//! A [`TagSpace`] is anchored to a scope node and holds that scope's tags. Lookups match the
//! scope by identity only; there is no nearest-ancestor search. Within a space the most recently
//! added tag wins when names repeat. Tags never own their targets, so whoever destroys a node
//! should call [`TagSpaces::forget_node`].

use crate::layouts::NodeId;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    name: char,
    target: NodeId,
}

impl Tag {
    pub fn new(name: char, target: NodeId) -> Self {
        Self { name, target }
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn target(&self) -> NodeId {
        self.target
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagSpace {
    scope: NodeId,
    // Oldest first; lookups walk it backwards.
    tags: Vec<Tag>,
}

impl TagSpace {
    pub fn new(scope: NodeId) -> Self {
        Self {
            scope,
            tags: Vec::new(),
        }
    }

    pub fn scope(&self) -> NodeId {
        self.scope
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags from the most recently added to the oldest.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter().rev()
    }

    pub fn add_tag(&mut self, tag: Tag) {
        trace!("Tag '{}' -> {:?} in {:?}", tag.name, tag.target, self.scope);
        self.tags.push(tag);
    }

    pub fn find_tag(&self, name: char) -> Option<&Tag> {
        self.tags().find(|tag| tag.name == name)
    }

    /// Removes the tag `name` currently resolves to. An older tag with the same name, if any,
    /// becomes visible again.
    pub fn remove_tag(&mut self, name: char) -> Option<Tag> {
        let index = self.tags.iter().rposition(|tag| tag.name == name)?;
        Some(self.tags.remove(index))
    }

    /// Drops every tag pointing at `node`. Returns how many were dropped.
    pub fn forget_node(&mut self, node: NodeId) -> usize {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.target != node);
        before - self.tags.len()
    }

    /// First character of `alphabet` no tag in this space uses.
    pub fn first_free_name(&self, alphabet: &str) -> Option<char> {
        alphabet
            .chars()
            .find(|name| self.find_tag(*name).is_none())
    }
}

#[derive(Debug, Default, Clone)]
pub struct TagSpaces {
    // Oldest first, like the tags inside each space.
    spaces: Vec<TagSpace>,
}

impl TagSpaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagSpace> {
        self.spaces.iter().rev()
    }

    pub fn add_tag_space(&mut self, space: TagSpace) {
        trace!("Tag space for {:?}", space.scope);
        self.spaces.push(space);
    }

    pub fn find_tag_space(&self, scope: NodeId) -> Option<&TagSpace> {
        self.spaces.iter().rev().find(|space| space.scope == scope)
    }

    pub fn find_tag_space_mut(&mut self, scope: NodeId) -> Option<&mut TagSpace> {
        self.spaces
            .iter_mut()
            .rev()
            .find(|space| space.scope == scope)
    }

    /// The node tagged `name` in the space anchored exactly at `scope`.
    pub fn find_tagged_node(&self, scope: NodeId, name: char) -> Option<NodeId> {
        self.find_tag_space(scope)?.find_tag(name).map(Tag::target)
    }

    /// Discards the space anchored at `scope`. Has to be called when the scope node goes away.
    pub fn remove_tag_space(&mut self, scope: NodeId) -> Option<TagSpace> {
        let index = self.spaces.iter().rposition(|space| space.scope == scope)?;
        Some(self.spaces.remove(index))
    }

    /// Re-anchors the space at `old` to `new`, for when a scope root is replaced by a fork or
    /// unfork. Returns false if no space was anchored at `old`.
    pub fn rescope(&mut self, old: NodeId, new: NodeId) -> bool {
        match self.find_tag_space_mut(old) {
            Some(space) => {
                trace!("Rescoped tag space {old:?} -> {new:?}");
                space.scope = new;
                true
            }
            None => false,
        }
    }

    /// Drops tags aimed at `node` in every space.
    pub fn forget_node(&mut self, node: NodeId) -> usize {
        self.spaces
            .iter_mut()
            .map(|space| space.forget_node(node))
            .sum()
    }
}

pub fn create_tag(name: char, target: NodeId) -> Tag {
    Tag::new(name, target)
}

pub fn create_tag_space(scope: NodeId) -> TagSpace {
    TagSpace::new(scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::BinTree;

    fn new_nodes(count: u32) -> Vec<NodeId> {
        let mut tree = BinTree::new();
        (0..count).map(|id| tree.create_window(id).unwrap()).collect()
    }

    #[test]
    fn test_tag_round_trip() {
        let nodes = new_nodes(2);
        let (scope, target) = (nodes[0], nodes[1]);

        let mut space = create_tag_space(scope);
        space.add_tag(create_tag('a', target));
        let mut spaces = TagSpaces::new();
        spaces.add_tag_space(space);

        assert_eq!(spaces.find_tagged_node(scope, 'a'), Some(target));
        assert_eq!(spaces.find_tagged_node(scope, 'b'), None);
    }

    #[test]
    fn test_scope_is_exact_match() {
        let nodes = new_nodes(3);
        let mut space = TagSpace::new(nodes[0]);
        space.add_tag(Tag::new('a', nodes[1]));
        let mut spaces = TagSpaces::new();
        spaces.add_tag_space(space);

        assert_eq!(spaces.find_tagged_node(nodes[2], 'a'), None);
        assert!(spaces.find_tag_space(nodes[2]).is_none());
    }

    #[test]
    fn test_same_name_in_different_scopes() {
        let nodes = new_nodes(4);
        let mut spaces = TagSpaces::new();
        for (scope, target) in [(nodes[0], nodes[1]), (nodes[2], nodes[3])] {
            let mut space = TagSpace::new(scope);
            space.add_tag(Tag::new('x', target));
            spaces.add_tag_space(space);
        }

        assert_eq!(spaces.find_tagged_node(nodes[0], 'x'), Some(nodes[1]));
        assert_eq!(spaces.find_tagged_node(nodes[2], 'x'), Some(nodes[3]));
    }

    #[test]
    fn test_duplicate_name_resolves_to_most_recent() {
        let nodes = new_nodes(3);
        let mut space = TagSpace::new(nodes[0]);
        space.add_tag(Tag::new('a', nodes[1]));
        space.add_tag(Tag::new('a', nodes[2]));

        assert_eq!(space.find_tag('a').map(Tag::target), Some(nodes[2]));
        assert_eq!(space.tags().next().map(Tag::target), Some(nodes[2]));

        assert_eq!(space.remove_tag('a').map(|t| t.target()), Some(nodes[2]));
        assert_eq!(space.find_tag('a').map(Tag::target), Some(nodes[1]));
        space.remove_tag('a');
        assert!(space.find_tag('a').is_none());
        assert!(space.remove_tag('a').is_none());
    }

    #[test]
    fn test_forget_node() {
        let nodes = new_nodes(3);
        let mut spaces = TagSpaces::new();
        let mut space = TagSpace::new(nodes[0]);
        space.add_tag(Tag::new('a', nodes[1]));
        space.add_tag(Tag::new('b', nodes[2]));
        space.add_tag(Tag::new('c', nodes[1]));
        spaces.add_tag_space(space);

        assert_eq!(spaces.forget_node(nodes[1]), 2);
        let space = spaces.find_tag_space(nodes[0]).unwrap();
        assert_eq!(space.len(), 1);
        assert_eq!(space.find_tag('b').map(Tag::target), Some(nodes[2]));
    }

    #[test]
    fn test_rescope_and_remove() {
        let nodes = new_nodes(3);
        let mut spaces = TagSpaces::new();
        let mut space = TagSpace::new(nodes[0]);
        space.add_tag(Tag::new('a', nodes[1]));
        spaces.add_tag_space(space);

        assert!(spaces.rescope(nodes[0], nodes[2]));
        assert!(!spaces.rescope(nodes[0], nodes[2]));
        assert_eq!(spaces.find_tagged_node(nodes[2], 'a'), Some(nodes[1]));

        assert!(spaces.remove_tag_space(nodes[2]).is_some());
        assert!(spaces.is_empty());
        assert_eq!(spaces.find_tagged_node(nodes[2], 'a'), None);
    }

    #[test]
    fn test_first_free_name() {
        let nodes = new_nodes(2);
        let mut space = TagSpace::new(nodes[0]);
        assert_eq!(space.first_free_name("asd"), Some('a'));
        space.add_tag(Tag::new('a', nodes[1]));
        space.add_tag(Tag::new('s', nodes[1]));
        assert_eq!(space.first_free_name("asd"), Some('d'));
        space.add_tag(Tag::new('d', nodes[1]));
        assert_eq!(space.first_free_name("asd"), None);
    }
}
