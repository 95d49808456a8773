use std::{fmt, mem};

/// The four infix operators of the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node exclusively owns its children, so a tree is released as a unit
/// when the root is dropped. Trees built by the parser contain the neutral
/// nodes (`0` for sums, `1` for products) that the grammar folds operands
/// into; they are part of the structure and are never simplified away.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
    },
    /// Negation of the operand.
    UnaryMinus {
        /// The negated expression.
        operand: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates a numeric leaf.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// Wraps `operand` in a negation node.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::UnaryMinus { operand: Box::new(operand) }
    }

    /// Combines two subtrees with `op`.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Number of levels in the tree; a single leaf has depth 1.
    ///
    /// ## Example
    /// ```
    /// use reckon::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add,
    ///                         Expr::number(1.0),
    ///                         Expr::negate(Expr::number(2.0)));
    ///
    /// assert_eq!(expr.depth(), 3);
    /// assert_eq!(expr.node_count(), 4);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            match node {
                Self::Number { .. } => {},
                Self::UnaryMinus { operand } => pending.push((operand.as_ref(), level + 1)),
                Self::BinaryOp { left, right, .. } => {
                    pending.push((left.as_ref(), level + 1));
                    pending.push((right.as_ref(), level + 1));
                },
            }
        }
        deepest
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                Self::Number { .. } => {},
                Self::UnaryMinus { operand } => pending.push(operand.as_ref()),
                Self::BinaryOp { left, right, .. } => {
                    pending.push(left.as_ref());
                    pending.push(right.as_ref());
                },
            }
        }
        count
    }

    /// Moves every child that has children of its own onto `pending`, leaving
    /// a leaf in its place.
    fn detach_children(&mut self, pending: &mut Vec<Box<Self>>) {
        let mut detach = |child: &mut Box<Self>| {
            if !matches!(**child, Self::Number { .. }) {
                pending.push(mem::replace(child, Box::new(Self::number(0.0))));
            }
        };
        match self {
            Self::Number { .. } => {},
            Self::UnaryMinus { operand } => detach(operand),
            Self::BinaryOp { left, right, .. } => {
                detach(left);
                detach(right);
            },
        }
    }
}

/// Releases the tree without recursion.
///
/// A long flat sum is a spine of thousands of nested nodes; dropping it
/// recursively would need one stack frame per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Prints the tree as a fully parenthesized expression.
///
/// Numbers use Rust's shortest round-trip formatting, which never falls back
/// to exponent notation, so the output of a parsed tree parses again and
/// evaluates to the same value. Non-finite leaves (only constructible by
/// hand) print as `inf` or `NaN` and do not re-parse.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::UnaryMinus { operand } => write!(f, "(-{operand})"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
