//! Typed regular expression AST.
//!
//! Children are exclusively owned by their parent, so the tree is finite,
//! acyclic and every node has the child count its kind requires.

use std::collections::BTreeSet;
use std::fmt;

/// Tag of an AST node, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AstKind {
    Alternation,
    Concatenation,
    KleeneStar,
    Literal,
}

impl AstKind {
    pub const ALL: [AstKind; 4] = [
        AstKind::Alternation,
        AstKind::Concatenation,
        AstKind::KleeneStar,
        AstKind::Literal,
    ];

    /// Name used for this kind in serialized input.
    pub fn name(self) -> &'static str {
        match self {
            AstKind::Alternation => "alternation",
            AstKind::Concatenation => "concatenation",
            AstKind::KleeneStar => "kleene_star",
            AstKind::Literal => "literal",
        }
    }

    /// Number of children a node of this kind owns.
    pub fn arity(self) -> usize {
        match self {
            AstKind::Alternation | AstKind::Concatenation => 2,
            AstKind::KleeneStar => 1,
            AstKind::Literal => 0,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for AstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A regular expression over bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ast {
    /// Exactly one input byte.
    Literal(u8),
    /// The left language followed by the right language.
    Concatenation(Box<Ast>, Box<Ast>),
    /// Either the left or the right language.
    Alternation(Box<Ast>, Box<Ast>),
    /// Zero or more repetitions of the inner language.
    KleeneStar(Box<Ast>),
}

impl Ast {
    pub fn literal(byte: u8) -> Self {
        Ast::Literal(byte)
    }

    pub fn concat(left: Ast, right: Ast) -> Self {
        Ast::Concatenation(Box::new(left), Box::new(right))
    }

    pub fn alt(left: Ast, right: Ast) -> Self {
        Ast::Alternation(Box::new(left), Box::new(right))
    }

    pub fn star(inner: Ast) -> Self {
        Ast::KleeneStar(Box::new(inner))
    }

    /// Left-nested concatenation of literals, `None` for empty input.
    pub fn string(bytes: impl AsRef<[u8]>) -> Option<Self> {
        let mut iter = bytes.as_ref().iter().copied();
        let first = Ast::literal(iter.next()?);
        Some(iter.fold(first, |acc, b| Ast::concat(acc, Ast::literal(b))))
    }

    pub fn kind(&self) -> AstKind {
        match self {
            Ast::Literal(_) => AstKind::Literal,
            Ast::Concatenation(..) => AstKind::Concatenation,
            Ast::Alternation(..) => AstKind::Alternation,
            Ast::KleeneStar(_) => AstKind::KleeneStar,
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Ast> {
        let (first, second) = match self {
            Ast::Literal(_) => (None, None),
            Ast::KleeneStar(inner) => (Some(inner.as_ref()), None),
            Ast::Concatenation(l, r) | Ast::Alternation(l, r) => {
                (Some(l.as_ref()), Some(r.as_ref()))
            }
        };
        first.into_iter().chain(second)
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> u32 {
        let mut max = 0;
        let mut stack = vec![(self, 1u32)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        max
    }

    /// Bytes that appear in literal nodes.
    pub fn alphabet(&self) -> BTreeSet<u8> {
        let mut bytes = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Ast::Literal(b) = node {
                bytes.insert(*b);
            }
            stack.extend(node.children());
        }
        bytes
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Alternation(..) => write!(f, "({self})"),
            _ => write!(f, "{self}"),
        }
    }
}

// Children are moved onto an explicit stack so dropping a deep tree does
// not recurse once per level.
impl Drop for Ast {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

impl Ast {
    fn detach_children(&mut self, stack: &mut Vec<Ast>) {
        let mut detach = |child: &mut Box<Ast>| {
            if !matches!(**child, Ast::Literal(_)) {
                stack.push(std::mem::replace(&mut **child, Ast::Literal(0)));
            }
        };
        match self {
            Ast::Literal(_) => {}
            Ast::Concatenation(l, r) | Ast::Alternation(l, r) => {
                detach(l);
                detach(r);
            }
            Ast::KleeneStar(inner) => detach(inner),
        }
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Literal(b) => write_escaped(f, *b),
            Ast::Concatenation(l, r) => {
                l.fmt_operand(f)?;
                r.fmt_operand(f)
            }
            Ast::Alternation(l, r) => write!(f, "{l}|{r}"),
            Ast::KleeneStar(inner) => match inner.as_ref() {
                Ast::Literal(_) => write!(f, "{inner}*"),
                _ => write!(f, "({inner})*"),
            },
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, b: u8) -> fmt::Result {
    const META: &[u8] = b"\\|*+?()[]{}.^$";
    if META.contains(&b) {
        write!(f, "\\{}", b as char)
    } else if b.is_ascii_graphic() || b == b' ' {
        write!(f, "{}", b as char)
    } else {
        write!(f, "\\x{b:02x}")
    }
}
