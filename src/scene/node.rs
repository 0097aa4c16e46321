use indexmap::IndexMap;

/// Element kinds a chart emits. Deliberately closed: charts produce paths,
/// circles, text and masks, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Svg,
    Defs,
    Mask,
    Circle,
    Path,
    Text,
}

impl NodeKind {
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Defs => "defs",
            Self::Mask => "mask",
            Self::Circle => "circle",
            Self::Path => "path",
            Self::Text => "text",
        }
    }
}

/// One node of the output scene graph.
///
/// Attributes keep insertion order so serialized markup is deterministic.
/// A chart builder owns its tree exclusively while drawing; once committed to
/// a surface the tree is never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    kind: NodeKind,
    attrs: IndexMap<String, String>,
    children: Vec<SceneNode>,
    text: Option<String>,
}

impl SceneNode {
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: IndexMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn text_content(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn append_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.append_child(child);
        self
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// First direct child of the given kind, mutable. Used by builders to
    /// reach the `defs` block of a mounted root.
    pub fn find_child_mut(&mut self, kind: NodeKind) -> Option<&mut SceneNode> {
        self.children.iter_mut().find(|child| child.kind == kind)
    }

    /// All descendants (including self) of the given kind, in document order.
    #[must_use]
    pub fn find_all(&self, kind: NodeKind) -> Vec<&SceneNode> {
        let mut found = Vec::new();
        self.collect_kind(kind, &mut found);
        found
    }

    fn collect_kind<'a>(&'a self, kind: NodeKind, found: &mut Vec<&'a SceneNode>) {
        if self.kind == kind {
            found.push(self);
        }
        for child in &self.children {
            child.collect_kind(kind, found);
        }
    }
}
