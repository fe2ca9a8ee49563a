use crate::ast::{
    Call, Clause, Create, Delete, Expr, Foreach, Match, Merge, MergeAction, MergeTrigger,
    Projection, ProjectionItem, Remove, RemoveItem, Return, Set, SetItem, SortDirection, SortItem,
    Union, Unwind, With, YieldItem, YieldItems,
};
use crate::parser::Parser;
use crate::syntax_kind::{Keyword, SyntaxKind};

/// Clauses allowed inside a `FOREACH` body.
const UPDATE_KEYWORDS: &[Keyword] = &[
    Keyword::Create,
    Keyword::Merge,
    Keyword::Detach,
    Keyword::Delete,
    Keyword::Set,
    Keyword::Remove,
    Keyword::Foreach,
];

impl Parser<'_> {
    pub(super) fn parse_match(&mut self) -> Option<Match> {
        let optional = self.eat_kw(Keyword::Optional);
        self.expect_kw(Keyword::Match)?;
        let pattern = self.parse_pattern()?;
        let predicate = self.parse_optional_where()?;
        Some(Match {
            optional,
            pattern,
            predicate,
        })
    }

    pub(super) fn parse_create(&mut self) -> Option<Create> {
        self.expect_kw(Keyword::Create)?;
        let pattern = self.parse_pattern()?;
        Some(Create { pattern })
    }

    pub(super) fn parse_merge(&mut self) -> Option<Merge> {
        self.expect_kw(Keyword::Merge)?;
        let part = self.parse_pattern_part()?;

        let mut actions = Vec::new();
        while self.eat_kw(Keyword::On) {
            let on = if self.eat_kw(Keyword::Create) {
                MergeTrigger::OnCreate
            } else if self.eat_kw(Keyword::Match) {
                MergeTrigger::OnMatch
            } else {
                return self.unexpected("expected `CREATE` or `MATCH` after `ON`");
            };
            self.expect_kw(Keyword::Set)?;
            let items = self.parse_comma_separated(Self::parse_set_item)?;
            actions.push(MergeAction { on, items });
        }

        Some(Merge { part, actions })
    }

    pub(super) fn parse_delete(&mut self) -> Option<Delete> {
        let detach = self.eat_kw(Keyword::Detach);
        self.expect_kw(Keyword::Delete)?;
        let exprs = self.parse_comma_separated(Self::parse_expr)?;
        Some(Delete { detach, exprs })
    }

    pub(super) fn parse_set(&mut self) -> Option<Set> {
        self.expect_kw(Keyword::Set)?;
        let items = self.parse_comma_separated(Self::parse_set_item)?;
        Some(Set { items })
    }

    fn parse_set_item(&mut self) -> Option<SetItem> {
        if self.at_name() {
            match self.nth(1) {
                SyntaxKind::Equals => {
                    let variable = self.parse_name("variable")?;
                    self.bump();
                    let value = self.parse_expr()?;
                    return Some(SetItem::OverwriteProperties { variable, value });
                }
                SyntaxKind::PlusEquals => {
                    let variable = self.parse_name("variable")?;
                    self.bump();
                    let value = self.parse_expr()?;
                    return Some(SetItem::MergeProperties { variable, value });
                }
                SyntaxKind::Colon => {
                    let variable = self.parse_name("variable")?;
                    let labels = self.parse_label_list()?;
                    return Some(SetItem::SetLabels { variable, labels });
                }
                _ => {}
            }
        }

        let target = self.parse_property_target()?;
        self.expect(SyntaxKind::Equals)?;
        let value = self.parse_expr()?;
        Some(SetItem::SetProperty { target, value })
    }

    pub(super) fn parse_remove(&mut self) -> Option<Remove> {
        self.expect_kw(Keyword::Remove)?;
        let items = self.parse_comma_separated(|p| {
            if p.at_name() && p.nth_at(1, SyntaxKind::Colon) {
                let variable = p.parse_name("variable")?;
                let labels = p.parse_label_list()?;
                return Some(RemoveItem::Labels { variable, labels });
            }
            p.parse_property_target().map(RemoveItem::Property)
        })?;
        Some(Remove { items })
    }

    /// Property access chain such as `n.prop` or `n.address.city`.
    fn parse_property_target(&mut self) -> Option<Expr> {
        let target = self.parse_postfix_expr(false)?;
        if !matches!(target, Expr::Property { .. }) {
            return self.unexpected("expected property access such as `n.name`");
        }
        Some(target)
    }

    pub(super) fn parse_return(&mut self) -> Option<Return> {
        self.expect_kw(Keyword::Return)?;
        let projection = self.parse_projection()?;
        Some(Return { projection })
    }

    pub(super) fn parse_with(&mut self) -> Option<With> {
        self.expect_kw(Keyword::With)?;
        let projection = self.parse_projection()?;
        let predicate = self.parse_optional_where()?;
        Some(With {
            projection,
            predicate,
        })
    }

    fn parse_projection(&mut self) -> Option<Projection> {
        let distinct = self.eat_kw(Keyword::Distinct);
        let star = self.eat(SyntaxKind::Star);
        let items = if !star || self.eat(SyntaxKind::Comma) {
            self.parse_comma_separated(Self::parse_projection_item)?
        } else {
            Vec::new()
        };

        let mut order_by = Vec::new();
        if self.at_kw(Keyword::Order) {
            self.bump();
            self.expect_kw(Keyword::By)?;
            order_by = self.parse_comma_separated(Self::parse_sort_item)?;
        }

        let skip = if self.eat_kw(Keyword::Skip) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let limit = if self.eat_kw(Keyword::Limit) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        Some(Projection {
            distinct,
            star,
            items,
            order_by,
            skip,
            limit,
        })
    }

    fn parse_projection_item(&mut self) -> Option<ProjectionItem> {
        let expr = self.parse_expr()?;
        let alias = self.parse_optional_alias()?;
        Some(ProjectionItem { expr, alias })
    }

    fn parse_sort_item(&mut self) -> Option<SortItem> {
        let expr = self.parse_expr()?;
        let direction = if self.eat_kw(Keyword::Desc) || self.eat_kw(Keyword::Descending) {
            SortDirection::Descending
        } else {
            // explicit ASC and the default read the same
            let _ = self.eat_kw(Keyword::Asc) || self.eat_kw(Keyword::Ascending);
            SortDirection::Ascending
        };
        Some(SortItem { expr, direction })
    }

    fn parse_optional_alias(&mut self) -> Option<Option<String>> {
        if !self.eat_kw(Keyword::As) {
            return Some(None);
        }
        self.parse_name("alias").map(Some)
    }

    /// `WHERE expr` if present.
    pub(super) fn parse_optional_where(&mut self) -> Option<Option<Expr>> {
        if !self.eat_kw(Keyword::Where) {
            return Some(None);
        }
        self.parse_expr().map(Some)
    }

    pub(super) fn parse_unwind(&mut self) -> Option<Unwind> {
        self.expect_kw(Keyword::Unwind)?;
        let expr = self.parse_expr()?;
        self.expect_kw(Keyword::As)?;
        let variable = self.parse_name("variable")?;
        Some(Unwind { expr, variable })
    }

    pub(super) fn parse_call(&mut self) -> Option<Call> {
        self.expect_kw(Keyword::Call)?;
        let procedure = self.parse_qualified_name("procedure name")?;

        let arguments = if self.at(SyntaxKind::ParenOpen) {
            let open = self.bump().span;
            let args = if self.at(SyntaxKind::ParenClose) {
                Vec::new()
            } else {
                self.parse_comma_separated(Self::parse_expr)?
            };
            self.expect_closing(SyntaxKind::ParenClose, open)?;
            Some(args)
        } else {
            None
        };

        let yields = if self.eat_kw(Keyword::Yield) {
            let items = self.parse_comma_separated(|p| {
                let field = p.parse_name("procedure result field")?;
                let alias = p.parse_optional_alias()?;
                Some(YieldItem { field, alias })
            })?;
            let predicate = self.parse_optional_where()?;
            Some(YieldItems { items, predicate })
        } else {
            None
        };

        Some(Call {
            procedure,
            arguments,
            yields,
        })
    }

    pub(super) fn parse_foreach(&mut self) -> Option<Foreach> {
        self.expect_kw(Keyword::Foreach)?;
        let open = self.expect(SyntaxKind::ParenOpen)?.span;
        let variable = self.parse_name("variable")?;
        self.expect_kw(Keyword::In)?;
        let list = self.parse_expr()?;
        self.expect(SyntaxKind::Pipe)?;

        let mut clauses: Vec<Clause> = Vec::new();
        while !self.eof() && !self.at(SyntaxKind::ParenClose) {
            if !UPDATE_KEYWORDS.iter().any(|kw| self.at_kw(*kw)) {
                return self.unexpected("expected an updating clause inside `FOREACH`");
            }
            clauses.push(self.parse_clause()?);
        }
        if clauses.is_empty() {
            return self.unexpected("expected an updating clause inside `FOREACH`");
        }
        self.expect_closing(SyntaxKind::ParenClose, open)?;

        Some(Foreach {
            variable,
            list,
            clauses,
        })
    }

    pub(super) fn parse_union(&mut self) -> Option<Union> {
        self.expect_kw(Keyword::Union)?;
        let all = self.eat_kw(Keyword::All);
        Some(Union { all })
    }
}
