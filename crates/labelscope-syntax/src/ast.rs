//! Owned syntax tree for Cypher statements.
//!
//! Every grammar category is a closed enum; consumers match exhaustively, so a
//! new variant breaks compilation of each pass until it is handled. The tree
//! owns its strings: rewriting consumes a [`Statement`] and moves untouched
//! sub-trees into the result.
//!
//! Names (variables, labels, relationship types, property keys) are stored
//! unquoted. Whether a name needs back-ticks is decided when rendering.

use rowan::TextRange;

/// Root of a parsed query: clauses in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub clauses: Vec<Clause>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Match(Match),
    Create(Create),
    Merge(Merge),
    Delete(Delete),
    Set(Set),
    Remove(Remove),
    Return(Return),
    With(With),
    Unwind(Unwind),
    Call(Call),
    Foreach(Foreach),
    Union(Union),
}

/// `[OPTIONAL] MATCH pattern [WHERE predicate]`
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub optional: bool,
    pub pattern: Pattern,
    pub predicate: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Create {
    pub pattern: Pattern,
}

/// `MERGE part [ON CREATE SET ...] [ON MATCH SET ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    pub part: PatternPart,
    pub actions: Vec<MergeAction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeAction {
    pub on: MergeTrigger,
    pub items: Vec<SetItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTrigger {
    OnCreate,
    OnMatch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub detach: bool,
    pub exprs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub items: Vec<SetItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Remove {
    pub items: Vec<RemoveItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub projection: Projection,
}

/// `WITH projection [WHERE predicate]`
#[derive(Debug, Clone, PartialEq)]
pub struct With {
    pub projection: Projection,
    pub predicate: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unwind {
    pub expr: Expr,
    pub variable: String,
}

/// `CALL ns.name(args) [YIELD ...]`
///
/// `arguments` is `None` when the parentheses were omitted altogether.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub procedure: QualifiedName,
    pub arguments: Option<Vec<Expr>>,
    pub yields: Option<YieldItems>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YieldItems {
    pub items: Vec<YieldItem>,
    pub predicate: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YieldItem {
    pub field: String,
    pub alias: Option<String>,
}

/// `FOREACH (variable IN list | clauses)`
#[derive(Debug, Clone, PartialEq)]
pub struct Foreach {
    pub variable: String,
    pub list: Expr,
    pub clauses: Vec<Clause>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Union {
    pub all: bool,
}

/// Dotted name of a procedure or function. `namespace` is empty for bare names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub namespace: Vec<String>,
    pub name: String,
}

/// Body shared by `RETURN` and `WITH`.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub distinct: bool,
    /// `RETURN *` (optionally followed by more items)
    pub star: bool,
    pub items: Vec<ProjectionItem>,
    pub order_by: Vec<SortItem>,
    pub skip: Option<Expr>,
    pub limit: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionItem {
    pub expr: Expr,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortItem {
    pub expr: Expr,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Comma-separated pattern parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub parts: Vec<PatternPart>,
}

/// `[p =] [shortestPath(] path [)]`
#[derive(Debug, Clone, PartialEq)]
pub struct PatternPart {
    pub variable: Option<String>,
    pub shortest: Option<ShortestPath>,
    pub path: PathPattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortestPath {
    Single,
    All,
}

/// A node followed by zero or more (relationship, node) steps.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPattern {
    pub start: NodePattern,
    pub steps: Vec<PatternStep>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternStep {
    pub relationship: RelationshipPattern,
    pub node: NodePattern,
}

/// `(variable [COPY OF base] :L1:L2 {properties})`
#[derive(Debug, Clone, PartialEq)]
pub struct NodePattern {
    pub variable: Option<String>,
    pub base_node: Option<String>,
    pub labels: Vec<String>,
    /// Map literal or parameter
    pub properties: Option<Box<Expr>>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipPattern {
    pub variable: Option<String>,
    pub types: Vec<String>,
    pub length: Option<VariableLength>,
    pub properties: Option<Box<Expr>>,
    pub direction: Direction,
    pub span: TextRange,
}

impl RelationshipPattern {
    /// True for `--`, `-->` and friends: nothing between the brackets.
    pub fn has_detail(&self) -> bool {
        self.variable.is_some()
            || !self.types.is_empty()
            || self.length.is_some()
            || self.properties.is_some()
    }
}

/// `*`, `*n`, `*min..max` with either bound optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableLength {
    Unbounded,
    Exact(u64),
    Range { min: Option<u64>, max: Option<u64> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `<-`
    Left,
    /// `->`
    Right,
    /// `<->`
    Both,
    /// `-`
    Undirected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetItem {
    /// `n.prop = value`; `target` is a property expression
    SetProperty { target: Expr, value: Expr },
    /// `n:A:B`
    SetLabels { variable: String, labels: Vec<String> },
    /// `n += map`
    MergeProperties { variable: String, value: Expr },
    /// `n = map`
    OverwriteProperties { variable: String, value: Expr },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveItem {
    Labels { variable: String, labels: Vec<String> },
    Property(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Variable(String),
    /// `$name`; legacy `{name}` parses to the same node
    Parameter(String),
    /// Integer literal as written (decimal or hex)
    Integer(String),
    /// Float literal as written
    Float(String),
    /// String literal with escapes resolved
    String(String),
    Bool(bool),
    Null,
    List(Vec<Expr>),
    Map(Vec<MapEntry>),
    Property {
        base: Box<Expr>,
        key: String,
    },
    Index {
        base: Box<Expr>,
        index: Box<Expr>,
    },
    Slice {
        base: Box<Expr>,
        from: Option<Box<Expr>>,
        to: Option<Box<Expr>>,
    },
    /// Label predicate `n:A:B`
    HasLabels {
        base: Box<Expr>,
        labels: Vec<String>,
    },
    FunctionCall(FunctionCall),
    /// `count(*)`
    CountStar,
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    IsNull {
        operand: Box<Expr>,
        negated: bool,
    },
    Case(Case),
    ListComprehension(ListComprehension),
    PatternComprehension(PatternComprehension),
    Quantified(Quantified),
    /// Relationship pattern used as a predicate: `(a)-[:R]->()`
    Pattern(PathPattern),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
    pub key: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: QualifiedName,
    pub distinct: bool,
    pub args: Vec<Expr>,
}

/// `CASE [subject] WHEN .. THEN .. [ELSE ..] END`
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub subject: Option<Box<Expr>>,
    pub alternatives: Vec<CaseAlternative>,
    pub default: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseAlternative {
    pub when: Expr,
    pub then: Expr,
}

/// `[x IN list WHERE predicate | projection]`
#[derive(Debug, Clone, PartialEq)]
pub struct ListComprehension {
    pub variable: String,
    pub list: Box<Expr>,
    pub predicate: Option<Box<Expr>>,
    pub projection: Option<Box<Expr>>,
}

/// `[p = (a)-->(b) WHERE predicate | projection]`
#[derive(Debug, Clone, PartialEq)]
pub struct PatternComprehension {
    pub variable: Option<String>,
    pub path: PathPattern,
    pub predicate: Option<Box<Expr>>,
    pub projection: Box<Expr>,
}

/// `all(x IN list WHERE predicate)` and its siblings
#[derive(Debug, Clone, PartialEq)]
pub struct Quantified {
    pub quantifier: Quantifier,
    pub variable: String,
    pub list: Box<Expr>,
    pub predicate: Option<Box<Expr>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    All,
    Any,
    None,
    Single,
}

impl Quantifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Quantifier::All => "all",
            Quantifier::Any => "any",
            Quantifier::None => "none",
            Quantifier::Single => "single",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    Xor,
    And,
    Eq,
    NotEq,
    Lt,
    Gt,
    Le,
    Ge,
    RegexMatch,
    StartsWith,
    EndsWith,
    Contains,
    In,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "OR",
            BinaryOp::Xor => "XOR",
            BinaryOp::And => "AND",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::RegexMatch => "=~",
            BinaryOp::StartsWith => "STARTS WITH",
            BinaryOp::EndsWith => "ENDS WITH",
            BinaryOp::Contains => "CONTAINS",
            BinaryOp::In => "IN",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "^",
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            BinaryOp::Or => Precedence::Or,
            BinaryOp::Xor => Precedence::Xor,
            BinaryOp::And => Precedence::And,
            BinaryOp::Eq
            | BinaryOp::NotEq
            | BinaryOp::Lt
            | BinaryOp::Gt
            | BinaryOp::Le
            | BinaryOp::Ge
            | BinaryOp::RegexMatch => Precedence::Comparison,
            BinaryOp::StartsWith | BinaryOp::EndsWith | BinaryOp::Contains | BinaryOp::In => {
                Precedence::Predicate
            }
            BinaryOp::Add | BinaryOp::Sub => Precedence::Additive,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => Precedence::Multiplicative,
            BinaryOp::Pow => Precedence::Power,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Minus,
    Plus,
}

/// Binding strength of expression forms, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Or,
    Xor,
    And,
    Not,
    Comparison,
    /// `STARTS WITH`, `ENDS WITH`, `CONTAINS`, `IN`, `IS [NOT] NULL`
    Predicate,
    Additive,
    Multiplicative,
    Power,
    Sign,
    /// Property access, indexing, slicing, label predicates
    Postfix,
    Atom,
}

impl Expr {
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Binary { op, .. } => op.precedence(),
            Expr::Unary {
                op: UnaryOp::Not, ..
            } => Precedence::Not,
            Expr::Unary { .. } => Precedence::Sign,
            Expr::IsNull { .. } => Precedence::Predicate,
            Expr::Property { .. }
            | Expr::Index { .. }
            | Expr::Slice { .. }
            | Expr::HasLabels { .. } => Precedence::Postfix,
            Expr::Variable(_)
            | Expr::Parameter(_)
            | Expr::Integer(_)
            | Expr::Float(_)
            | Expr::String(_)
            | Expr::Bool(_)
            | Expr::Null
            | Expr::List(_)
            | Expr::Map(_)
            | Expr::FunctionCall(_)
            | Expr::CountStar
            | Expr::Case(_)
            | Expr::ListComprehension(_)
            | Expr::PatternComprehension(_)
            | Expr::Quantified(_)
            | Expr::Pattern(_) => Precedence::Atom,
        }
    }
}
