use rowan::TextRange;

use crate::ast::{
    Direction, Expr, NodePattern, PathPattern, Pattern, PatternPart, PatternStep,
    RelationshipPattern, ShortestPath, VariableLength,
};
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::syntax_kind::{Keyword, SyntaxKind};

impl Parser<'_> {
    pub(super) fn parse_pattern(&mut self) -> Option<Pattern> {
        let parts = self.parse_comma_separated(Self::parse_pattern_part)?;
        Some(Pattern { parts })
    }

    pub(super) fn parse_pattern_part(&mut self) -> Option<PatternPart> {
        let variable = if self.at_name() && self.nth_at(1, SyntaxKind::Equals) {
            let name = self.parse_name("path variable")?;
            self.bump();
            Some(name)
        } else {
            None
        };

        let shortest = if !self.nth_at(1, SyntaxKind::ParenOpen) {
            None
        } else if self.at_kw(Keyword::ShortestPath) {
            Some(ShortestPath::Single)
        } else if self.at_kw(Keyword::AllShortestPaths) {
            Some(ShortestPath::All)
        } else {
            None
        };

        let path = if shortest.is_some() {
            self.bump();
            let open = self.bump().span;
            let path = self.parse_path_pattern()?;
            self.expect_closing(SyntaxKind::ParenClose, open)?;
            path
        } else {
            self.parse_path_pattern()?
        };

        Some(PatternPart {
            variable,
            shortest,
            path,
        })
    }

    /// A node followed by any number of relationship-node steps.
    pub(super) fn parse_path_pattern(&mut self) -> Option<PathPattern> {
        self.enter_recursion()?;
        let result = self.parse_path_pattern_inner();
        self.exit_recursion();
        result
    }

    fn parse_path_pattern_inner(&mut self) -> Option<PathPattern> {
        let start = self.parse_node_pattern()?;
        let mut steps = Vec::new();
        while self.at_relationship_start() {
            let relationship = self.parse_relationship_pattern()?;
            let node = self.parse_node_pattern()?;
            steps.push(PatternStep { relationship, node });
        }
        Some(PathPattern { start, steps })
    }

    /// Path with at least one relationship, as used inside expressions.
    /// Returns `None` without a diagnostic for a lone node.
    pub(super) fn parse_relationships_pattern(&mut self) -> Option<PathPattern> {
        let path = self.parse_path_pattern()?;
        if path.steps.is_empty() {
            return None;
        }
        Some(path)
    }

    fn at_relationship_start(&self) -> bool {
        self.at(SyntaxKind::Minus)
            || (self.at(SyntaxKind::Less) && self.nth_at(1, SyntaxKind::Minus))
    }

    fn at_copy_of(&self) -> bool {
        self.at_kw(Keyword::Copy) && self.nth_at_kw(1, Keyword::Of)
    }

    pub(super) fn parse_node_pattern(&mut self) -> Option<NodePattern> {
        if !self.at(SyntaxKind::ParenOpen) {
            return self.error(DiagnosticKind::ExpectedNodePattern);
        }
        let open = self.bump().span;

        let variable = if self.at_name() && !self.at_copy_of() {
            Some(self.parse_name("variable")?)
        } else {
            None
        };

        let base_node = if self.at_copy_of() {
            self.bump();
            self.bump();
            Some(self.parse_name("base node variable")?)
        } else {
            None
        };

        let labels = if self.at(SyntaxKind::Colon) {
            self.parse_label_list()?
        } else {
            Vec::new()
        };

        let properties = self.parse_optional_properties()?;
        let close = self.expect_closing(SyntaxKind::ParenClose, open)?;

        Some(NodePattern {
            variable,
            base_node,
            labels,
            properties,
            span: TextRange::new(open.start(), close.span.end()),
        })
    }

    fn parse_relationship_pattern(&mut self) -> Option<RelationshipPattern> {
        let start = self.current_span().start();
        let left = self.eat(SyntaxKind::Less);
        self.expect(SyntaxKind::Minus)?;

        let mut variable = None;
        let mut types = Vec::new();
        let mut length = None;
        let mut properties = None;

        if self.at(SyntaxKind::BracketOpen) {
            let open = self.bump().span;
            if self.at_name() {
                variable = Some(self.parse_name("variable")?);
            }
            if self.eat(SyntaxKind::Colon) {
                types.push(self.parse_name("relationship type")?);
                while self.eat(SyntaxKind::Pipe) {
                    // `:A|:B` is the older spelling of `:A|B`
                    self.eat(SyntaxKind::Colon);
                    types.push(self.parse_name("relationship type")?);
                }
            }
            if self.at(SyntaxKind::Star) {
                length = Some(self.parse_variable_length()?);
            }
            properties = self.parse_optional_properties()?;
            self.expect_closing(SyntaxKind::BracketClose, open)?;
        }

        self.expect(SyntaxKind::Minus)?;
        let right = self.eat(SyntaxKind::Greater);

        let direction = match (left, right) {
            (true, true) => Direction::Both,
            (true, false) => Direction::Left,
            (false, true) => Direction::Right,
            (false, false) => Direction::Undirected,
        };

        Some(RelationshipPattern {
            variable,
            types,
            length,
            properties,
            direction,
            span: self.span_from(start),
        })
    }

    fn parse_variable_length(&mut self) -> Option<VariableLength> {
        self.expect(SyntaxKind::Star)?;
        let min = self.parse_optional_length_bound()?;
        if !self.eat(SyntaxKind::DotDot) {
            return Some(match min {
                Some(n) => VariableLength::Exact(n),
                None => VariableLength::Unbounded,
            });
        }
        let max = self.parse_optional_length_bound()?;
        Some(VariableLength::Range { min, max })
    }

    fn parse_optional_length_bound(&mut self) -> Option<Option<u64>> {
        if !self.at(SyntaxKind::Integer) {
            return Some(None);
        }
        let text = self.current_text();
        match text.parse::<u64>() {
            Ok(n) => {
                self.bump();
                Some(Some(n))
            }
            Err(_) => self.error_msg(DiagnosticKind::InvalidRange, format!("`{}`", text)),
        }
    }

    /// `{map}`, `$param` or legacy `{param}` after labels or relationship types.
    fn parse_optional_properties(&mut self) -> Option<Option<Box<Expr>>> {
        match self.current() {
            SyntaxKind::BraceOpen => {
                let expr = self.parse_map_or_legacy_parameter()?;
                Some(Some(Box::new(expr)))
            }
            SyntaxKind::Dollar => {
                let expr = self.parse_parameter()?;
                Some(Some(Box::new(expr)))
            }
            _ => Some(None),
        }
    }
}
