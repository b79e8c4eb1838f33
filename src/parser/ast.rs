//! Abstract syntax tree produced by the grammar, and the builder that
//! records it.
//!
//! Productions never mutate a tree directly. They append edits (`add`,
//! `enter`, `exit`) to an `AstBuilder` log, and the parser rolls that log
//! back together with the token cursor whenever an alternative fails. The
//! tree is only materialized once parsing is over, so nodes from failed
//! alternatives never reach it.
use itertools::Itertools as _;

/// Label of an `Ast` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NodeKind {
    Root,
    Select,
    Insert,
    TableName,
    Columns,
    Values,
    /// `[table].column`; children are the table then the column.
    QualifiedName,
    String,
    Int,
}

/// An ordered, labeled tree node. Children are owned exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    pub kind: NodeKind,
    pub value: String,
    pub children: Vec<Ast>,
}

impl Ast {
    pub fn new(kind: NodeKind) -> Self {
        Self::leaf(kind, "")
    }

    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(NodeKind::Root)
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Ast>) -> Self {
        self.children.extend(children);
        self
    }

    /// Values of the direct children, in order.
    pub fn child_values(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.value.as_str()).collect()
    }
}

/// Renders as `Kind(value)[child, child]`, omitting empty parts.
impl std::fmt::Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.value.is_empty() {
            write!(f, "({})", self.value)?;
        }
        if !self.children.is_empty() {
            write!(f, "[{}]", self.children.iter().join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Edit {
    Add(Ast),
    Enter(Ast),
    Exit,
}

/// Position in an `AstBuilder`'s edit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstMark {
    edits: usize,
    depth: usize,
}

/// Append-only log of tree edits, rooted at an implicit `Root` node.
///
/// `depth` counts nodes entered but not yet exited, i.e. how far the open
/// node is below the root.
#[derive(Debug, Clone, Default)]
pub struct AstBuilder {
    edits: Vec<Edit>,
    depth: usize,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` to the open node.
    pub fn add_node(&mut self, node: Ast) {
        self.edits.push(Edit::Add(node));
    }

    /// Append `node` to the open node and open it.
    pub fn enter_node(&mut self, node: Ast) {
        self.edits.push(Edit::Enter(node));
        self.depth += 1;
    }

    /// Reopen the parent of the open node.
    ///
    /// # Panics
    /// If the root is the open node.
    pub fn exit_node(&mut self) {
        assert!(self.depth > 0, "exit_node called while the root node is open");
        self.edits.push(Edit::Exit);
        self.depth -= 1;
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub fn mark(&self) -> AstMark {
        AstMark {
            edits: self.edits.len(),
            depth: self.depth,
        }
    }

    /// Drop every edit recorded after `mark`.
    ///
    /// # Panics
    /// If `mark` is ahead of the log, i.e. it was taken on a branch that has
    /// already been rolled back.
    pub fn rollback(&mut self, mark: AstMark) {
        assert!(
            mark.edits <= self.edits.len(),
            "rollback to mark {} beyond log of {} edits",
            mark.edits,
            self.edits.len()
        );
        self.edits.truncate(mark.edits);
        self.depth = mark.depth;
    }

    /// Replay the log into a tree. Nodes still open are closed into their
    /// parents.
    pub fn build(self) -> Ast {
        let mut stack = vec![Ast::root()];
        for edit in self.edits {
            match edit {
                Edit::Add(node) => push_child(&mut stack, node),
                Edit::Enter(node) => stack.push(node),
                Edit::Exit => close(&mut stack),
            }
        }
        while stack.len() > 1 {
            close(&mut stack);
        }
        stack.pop().unwrap_or_else(Ast::root)
    }
}

fn push_child(stack: &mut [Ast], node: Ast) {
    if let Some(open) = stack.last_mut() {
        open.children.push(node);
    }
}

fn close(stack: &mut Vec<Ast>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(node) = stack.pop() {
        push_child(stack, node);
    }
}
