//! Expression precedence ladder, weakest binding first:
//!
//! `OR` < `XOR` < `AND` < `NOT` < comparison < string/list/null predicates
//! < additive < multiplicative < power < unary sign < postfix < atom.
//!
//! Binary levels are parsed by precedence climbing and are left-associative.
//! Every operator in a chain nests the expression built so far one level
//! deeper, so chained operators are charged against recursion fuel like
//! parentheses are.

use crate::ast::{
    BinaryOp, Case, CaseAlternative, Expr, FunctionCall, ListComprehension, MapEntry,
    PatternComprehension, Precedence, Quantified, Quantifier, UnaryOp,
};
use crate::diagnostics::DiagnosticKind;
use crate::lexer::unescape_string;
use crate::parser::Parser;
use crate::syntax_kind::token_sets::EXPR_FIRST;
use crate::syntax_kind::{Keyword, SyntaxKind};

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

/// Lowest level accepted as the right operand of `prec`.
fn right_operand_level(prec: Precedence) -> Precedence {
    match prec {
        Precedence::Or => Precedence::Xor,
        Precedence::Xor => Precedence::And,
        Precedence::And => Precedence::Not,
        Precedence::Not | Precedence::Comparison => Precedence::Predicate,
        Precedence::Predicate => Precedence::Additive,
        Precedence::Additive => Precedence::Multiplicative,
        Precedence::Multiplicative => Precedence::Power,
        Precedence::Power | Precedence::Sign | Precedence::Postfix | Precedence::Atom => {
            Precedence::Sign
        }
    }
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Option<Expr> {
        if !self.at_one_of(EXPR_FIRST) {
            return self.error(DiagnosticKind::ExpectedExpression);
        }
        self.enter_recursion()?;
        let result = self.parse_binary(Precedence::Or);
        self.exit_recursion();
        result
    }

    /// Expression made of operators binding at least as tight as `min`.
    fn parse_binary(&mut self, min: Precedence) -> Option<Expr> {
        let depth = self.depth;
        let mut lhs = if min <= Precedence::Not && self.at_kw(Keyword::Not) {
            self.parse_not()?
        } else {
            self.parse_unary()?
        };

        // Right operand of the last comparison, while comparisons are chaining.
        let mut chain_tail: Option<Expr> = None;
        loop {
            if min <= Precedence::Predicate && self.at_kw(Keyword::Is) {
                self.enter_recursion()?;
                self.bump();
                let negated = self.eat_kw(Keyword::Not);
                self.expect_kw(Keyword::Null)?;
                chain_tail = None;
                lhs = Expr::IsNull {
                    operand: Box::new(lhs),
                    negated,
                };
                continue;
            }

            let Some((op, tokens)) = self
                .binary_op_ahead()
                .filter(|(op, _)| op.precedence() >= min)
            else {
                break;
            };
            self.enter_recursion()?;
            for _ in 0..tokens {
                self.bump();
            }
            let rhs = self.parse_binary(right_operand_level(op.precedence()))?;
            if op.precedence() != Precedence::Comparison {
                chain_tail = None;
                lhs = binary(op, lhs, rhs);
                continue;
            }
            // `a < b < c` compares pairwise: `a < b AND b < c`.
            lhs = match chain_tail.replace(rhs.clone()) {
                Some(prev) => binary(BinaryOp::And, lhs, binary(op, prev, rhs)),
                None => binary(op, lhs, rhs),
            };
        }

        self.depth = depth;
        Some(lhs)
    }

    /// Binary operator at the cursor and the number of tokens spelling it.
    fn binary_op_ahead(&self) -> Option<(BinaryOp, usize)> {
        let op = match self.current() {
            SyntaxKind::Equals => BinaryOp::Eq,
            SyntaxKind::NotEquals | SyntaxKind::BangEquals => BinaryOp::NotEq,
            SyntaxKind::Less => BinaryOp::Lt,
            SyntaxKind::Greater => BinaryOp::Gt,
            SyntaxKind::LessEquals => BinaryOp::Le,
            SyntaxKind::GreaterEquals => BinaryOp::Ge,
            SyntaxKind::RegexMatch => BinaryOp::RegexMatch,
            SyntaxKind::Plus => BinaryOp::Add,
            SyntaxKind::Minus => BinaryOp::Sub,
            SyntaxKind::Star => BinaryOp::Mul,
            SyntaxKind::Slash => BinaryOp::Div,
            SyntaxKind::Percent => BinaryOp::Mod,
            SyntaxKind::Caret => BinaryOp::Pow,
            SyntaxKind::Id => return self.keyword_op_ahead(),
            _ => return None,
        };
        Some((op, 1))
    }

    /// `OR`, `XOR`, `AND`, `CONTAINS`, `IN`, `STARTS WITH`, `ENDS WITH`
    fn keyword_op_ahead(&self) -> Option<(BinaryOp, usize)> {
        let single = [
            (Keyword::Or, BinaryOp::Or),
            (Keyword::Xor, BinaryOp::Xor),
            (Keyword::And, BinaryOp::And),
            (Keyword::Contains, BinaryOp::Contains),
            (Keyword::In, BinaryOp::In),
        ];
        if let Some(&(_, op)) = single.iter().find(|(kw, _)| self.at_kw(*kw)) {
            return Some((op, 1));
        }
        if !self.nth_at_kw(1, Keyword::With) {
            return None;
        }
        if self.at_kw(Keyword::Starts) {
            Some((BinaryOp::StartsWith, 2))
        } else if self.at_kw(Keyword::Ends) {
            Some((BinaryOp::EndsWith, 2))
        } else {
            None
        }
    }

    /// `NOT` binds looser than comparisons: `NOT a = b` negates the comparison.
    fn parse_not(&mut self) -> Option<Expr> {
        self.bump();
        self.enter_recursion()?;
        let operand = if self.at_kw(Keyword::Not) {
            self.parse_not()
        } else {
            self.parse_binary(Precedence::Comparison)
        };
        self.exit_recursion();
        Some(Expr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(operand?),
        })
    }

    fn parse_unary(&mut self) -> Option<Expr> {
        let op = match self.current() {
            SyntaxKind::Minus => UnaryOp::Minus,
            SyntaxKind::Plus => UnaryOp::Plus,
            _ => return self.parse_postfix_expr(true),
        };
        self.bump();
        self.enter_recursion()?;
        let operand = self.parse_unary();
        self.exit_recursion();
        Some(Expr::Unary {
            op,
            operand: Box::new(operand?),
        })
    }

    /// Atom followed by `.key`, `[index]`, `[from..to]` and, when
    /// `allow_labels` is set, `:Label` predicates. Each suffix nests the
    /// base one level deeper and is charged as recursion until the chain ends.
    pub(super) fn parse_postfix_expr(&mut self, allow_labels: bool) -> Option<Expr> {
        let depth = self.depth;
        let mut expr = self.parse_atom()?;
        loop {
            match self.current() {
                SyntaxKind::Dot => {
                    self.enter_recursion()?;
                    self.bump();
                    let key = self.parse_name("property key")?;
                    expr = Expr::Property {
                        base: Box::new(expr),
                        key,
                    };
                }
                SyntaxKind::BracketOpen => {
                    self.enter_recursion()?;
                    expr = self.parse_index_or_slice(expr)?;
                }
                SyntaxKind::Colon if allow_labels => {
                    self.enter_recursion()?;
                    let labels = self.parse_label_list()?;
                    expr = Expr::HasLabels {
                        base: Box::new(expr),
                        labels,
                    };
                }
                _ => break,
            }
        }
        self.depth = depth;
        Some(expr)
    }

    fn parse_index_or_slice(&mut self, base: Expr) -> Option<Expr> {
        let open = self.bump().span;
        let from = if self.at(SyntaxKind::DotDot) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };

        if !self.eat(SyntaxKind::DotDot) {
            self.expect_closing(SyntaxKind::BracketClose, open)?;
            let Some(index) = from else {
                return self.error(DiagnosticKind::ExpectedExpression);
            };
            return Some(Expr::Index {
                base: Box::new(base),
                index,
            });
        }

        let to = if self.at(SyntaxKind::BracketClose) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        self.expect_closing(SyntaxKind::BracketClose, open)?;
        Some(Expr::Slice {
            base: Box::new(base),
            from,
            to,
        })
    }

    fn parse_atom(&mut self) -> Option<Expr> {
        match self.current() {
            SyntaxKind::Integer => {
                let text = self.current_text().to_string();
                self.bump();
                Some(Expr::Integer(text))
            }
            SyntaxKind::Float => {
                let text = self.current_text().to_string();
                self.bump();
                Some(Expr::Float(text))
            }
            SyntaxKind::StringLiteral => self.parse_string(),
            SyntaxKind::Dollar => self.parse_parameter(),
            SyntaxKind::BraceOpen => self.parse_map_or_legacy_parameter(),
            SyntaxKind::BracketOpen => self.parse_list_like(),
            SyntaxKind::ParenOpen => self.parse_parenthesized_or_pattern(),
            SyntaxKind::Id => self.parse_word_atom(),
            SyntaxKind::QuotedId => self.parse_name("variable").map(Expr::Variable),
            _ => self.error(DiagnosticKind::ExpectedExpression),
        }
    }

    fn parse_string(&mut self) -> Option<Expr> {
        match unescape_string(self.current_text()) {
            Some(value) => {
                self.bump();
                Some(Expr::String(value))
            }
            None => self.error(DiagnosticKind::InvalidEscape),
        }
    }

    /// `$name` or `$0`
    pub(super) fn parse_parameter(&mut self) -> Option<Expr> {
        self.expect(SyntaxKind::Dollar)?;
        if self.at(SyntaxKind::Integer) {
            let text = self.current_text().to_string();
            self.bump();
            return Some(Expr::Parameter(text));
        }
        self.parse_name("parameter name").map(Expr::Parameter)
    }

    /// `{key: value, ...}` or the legacy parameter form `{name}`.
    pub(super) fn parse_map_or_legacy_parameter(&mut self) -> Option<Expr> {
        let legacy_parameter = (self.nth_at_name(1) || self.nth_at(1, SyntaxKind::Integer))
            && self.nth_at(2, SyntaxKind::BraceClose);
        let open = self.expect(SyntaxKind::BraceOpen)?.span;

        if legacy_parameter {
            let name = if self.at(SyntaxKind::Integer) {
                let text = self.current_text().to_string();
                self.bump();
                text
            } else {
                self.parse_name("parameter name")?
            };
            self.bump();
            return Some(Expr::Parameter(name));
        }

        let mut entries = Vec::new();
        if !self.at(SyntaxKind::BraceClose) {
            entries = self.parse_comma_separated(|p| {
                let key = p.parse_name("property key")?;
                p.expect(SyntaxKind::Colon)?;
                let value = p.parse_expr()?;
                Some(MapEntry { key, value })
            })?;
        }
        self.expect_closing(SyntaxKind::BraceClose, open)?;
        Some(Expr::Map(entries))
    }

    /// Pattern comprehension, list comprehension or list literal.
    fn parse_list_like(&mut self) -> Option<Expr> {
        let may_be_pattern = self.nth_at(1, SyntaxKind::ParenOpen)
            || (self.nth_at_name(1) && self.nth_at(2, SyntaxKind::Equals));
        if may_be_pattern
            && let Some(comprehension) = self.attempt(Self::parse_pattern_comprehension)
        {
            return Some(Expr::PatternComprehension(comprehension));
        }

        if self.nth_at_name(1) && self.nth_at_kw(2, Keyword::In) {
            return self.parse_list_comprehension().map(Expr::ListComprehension);
        }

        let open = self.bump().span;
        let mut items = Vec::new();
        if !self.at(SyntaxKind::BracketClose) {
            items = self.parse_comma_separated(Self::parse_expr)?;
        }
        self.expect_closing(SyntaxKind::BracketClose, open)?;
        Some(Expr::List(items))
    }

    fn parse_pattern_comprehension(&mut self) -> Option<PatternComprehension> {
        let open = self.expect(SyntaxKind::BracketOpen)?.span;
        let variable = if self.at_name() && self.nth_at(1, SyntaxKind::Equals) {
            let name = self.parse_name("path variable")?;
            self.bump();
            Some(name)
        } else {
            None
        };
        let path = self.parse_relationships_pattern()?;
        let predicate = self.parse_optional_where()?.map(Box::new);
        self.expect(SyntaxKind::Pipe)?;
        let projection = Box::new(self.parse_expr()?);
        self.expect_closing(SyntaxKind::BracketClose, open)?;
        Some(PatternComprehension {
            variable,
            path,
            predicate,
            projection,
        })
    }

    fn parse_list_comprehension(&mut self) -> Option<ListComprehension> {
        let open = self.expect(SyntaxKind::BracketOpen)?.span;
        let variable = self.parse_name("variable")?;
        self.expect_kw(Keyword::In)?;
        let list = Box::new(self.parse_expr()?);
        let predicate = self.parse_optional_where()?.map(Box::new);
        let projection = if self.eat(SyntaxKind::Pipe) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_closing(SyntaxKind::BracketClose, open)?;
        Some(ListComprehension {
            variable,
            list,
            predicate,
            projection,
        })
    }

    /// `(a)-[:R]->(b)` pattern predicate, else a parenthesized expression.
    fn parse_parenthesized_or_pattern(&mut self) -> Option<Expr> {
        if let Some(path) = self.attempt(Self::parse_relationships_pattern) {
            return Some(Expr::Pattern(path));
        }
        let open = self.bump().span;
        let inner = self.parse_expr()?;
        self.expect_closing(SyntaxKind::ParenClose, open)?;
        Some(inner)
    }

    /// Atoms led by an identifier: literals spelled as words, `CASE`,
    /// `count(*)`, quantifiers, function calls and plain variables.
    fn parse_word_atom(&mut self) -> Option<Expr> {
        if self.eat_kw(Keyword::True) {
            return Some(Expr::Bool(true));
        }
        if self.eat_kw(Keyword::False) {
            return Some(Expr::Bool(false));
        }
        if self.eat_kw(Keyword::Null) {
            return Some(Expr::Null);
        }
        if self.at_kw(Keyword::Case) {
            return self.parse_case().map(Expr::Case);
        }
        if self.at_kw(Keyword::Count)
            && self.nth_at(1, SyntaxKind::ParenOpen)
            && self.nth_at(2, SyntaxKind::Star)
            && self.nth_at(3, SyntaxKind::ParenClose)
        {
            for _ in 0..4 {
                self.bump();
            }
            return Some(Expr::CountStar);
        }
        if let Some(quantifier) = self.quantifier_ahead() {
            return self.parse_quantified(quantifier).map(Expr::Quantified);
        }
        if self.function_call_ahead() {
            return self.parse_function_call().map(Expr::FunctionCall);
        }
        self.parse_name("variable").map(Expr::Variable)
    }

    /// `all(x IN ...`, `any(`, `none(`, `single(`
    fn quantifier_ahead(&self) -> Option<Quantifier> {
        if !(self.nth_at(1, SyntaxKind::ParenOpen)
            && self.nth_at_name(2)
            && self.nth_at_kw(3, Keyword::In))
        {
            return None;
        }
        if self.at_kw(Keyword::All) {
            Some(Quantifier::All)
        } else if self.at_kw(Keyword::Any) {
            Some(Quantifier::Any)
        } else if self.at_kw(Keyword::None) {
            Some(Quantifier::None)
        } else if self.at_kw(Keyword::Single) {
            Some(Quantifier::Single)
        } else {
            None
        }
    }

    /// `name (. name)* (`
    fn function_call_ahead(&self) -> bool {
        let mut i = 0;
        loop {
            if !self.nth_at_name(i) {
                return false;
            }
            match self.nth(i + 1) {
                SyntaxKind::ParenOpen => return true,
                SyntaxKind::Dot => i += 2,
                _ => return false,
            }
        }
    }

    fn parse_quantified(&mut self, quantifier: Quantifier) -> Option<Quantified> {
        self.bump();
        let open = self.expect(SyntaxKind::ParenOpen)?.span;
        let variable = self.parse_name("variable")?;
        self.expect_kw(Keyword::In)?;
        let list = Box::new(self.parse_expr()?);
        let predicate = self.parse_optional_where()?.map(Box::new);
        self.expect_closing(SyntaxKind::ParenClose, open)?;
        Some(Quantified {
            quantifier,
            variable,
            list,
            predicate,
        })
    }

    fn parse_function_call(&mut self) -> Option<FunctionCall> {
        let name = self.parse_qualified_name("function name")?;
        let open = self.expect(SyntaxKind::ParenOpen)?.span;
        let distinct = self.eat_kw(Keyword::Distinct);
        let args = if self.at(SyntaxKind::ParenClose) {
            Vec::new()
        } else {
            self.parse_comma_separated(Self::parse_expr)?
        };
        self.expect_closing(SyntaxKind::ParenClose, open)?;
        Some(FunctionCall {
            name,
            distinct,
            args,
        })
    }

    fn parse_case(&mut self) -> Option<Case> {
        self.expect_kw(Keyword::Case)?;
        let subject = if self.at_kw(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };

        let mut alternatives = Vec::new();
        while self.eat_kw(Keyword::When) {
            let when = self.parse_expr()?;
            self.expect_kw(Keyword::Then)?;
            let then = self.parse_expr()?;
            alternatives.push(CaseAlternative { when, then });
        }
        if alternatives.is_empty() {
            return self.error_msg(DiagnosticKind::ExpectedKeyword, Keyword::When.as_str());
        }

        let default = if self.eat_kw(Keyword::Else) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_kw(Keyword::End)?;

        Some(Case {
            subject,
            alternatives,
            default,
        })
    }
}
