use crate::table::{RoleStepTable, StatusStepMap};
use crate::token::FilterToken;

/// Derives filter tokens from the roles a user holds.
///
/// The table is built eagerly at construction and never changes, so a
/// resolver can be shared freely across calls.
#[derive(Debug, Clone)]
pub struct RoleFilterResolver {
    table: RoleStepTable,
}

impl RoleFilterResolver {
    pub fn new(table: RoleStepTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RoleStepTable {
        &self.table
    }

    /// Tokens for every role in `roles`, concatenated in input order.
    ///
    /// Roles absent from the table contribute nothing. Tokens are not
    /// deduplicated: two roles declaring the same status/step pair emit it
    /// twice. Never fails; the result may be empty.
    pub fn resolve_filters<S: AsRef<str>>(&self, roles: &[S]) -> Vec<FilterToken> {
        let mut tokens = Vec::new();
        for role in roles {
            tokens.extend(self.filters_for_role(role.as_ref()));
        }
        tokens
    }

    /// Tokens for a single role: per status in table order, per step in
    /// declared list order.
    pub fn filters_for_role(&self, role: &str) -> Vec<FilterToken> {
        match self.table.role(role) {
            Some(map) => cross_product(map),
            None => Vec::new(),
        }
    }
}

impl Default for RoleFilterResolver {
    fn default() -> Self {
        Self::new(RoleStepTable::product_launch())
    }
}

fn cross_product(map: &StatusStepMap) -> Vec<FilterToken> {
    let mut tokens = Vec::new();
    for (status, steps) in map {
        for step in steps {
            tokens.push(FilterToken::new(status.clone(), step.clone()));
        }
    }
    tokens
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_yields_nothing() {
        let resolver = RoleFilterResolver::default();
        assert!(resolver.resolve_filters(&["Astronaut"]).is_empty());
        assert!(resolver.filters_for_role("merchandiser").is_empty());
    }

    #[test]
    fn merchandiser_tokens() {
        let resolver = RoleFilterResolver::default();
        let tokens = resolver.resolve_filters(&["Merchandiser"]);
        assert_eq!(tokens.len(), 26);

        let rendered: Vec<String> = tokens.iter().map(FilterToken::render).collect();
        assert!(rendered.contains(&"'Market-end Feedback':'Information Gathering'".to_string()));
        assert!(
            rendered.contains(&"'Digital Creation Stage Wrap-Up':'Check List Verification'".to_string())
        );
    }

    #[test]
    fn multi_role_output_is_per_role_concatenation() {
        let resolver = RoleFilterResolver::default();
        let buyer = resolver.resolve_filters(&["Buyer"]);
        let lead = resolver.resolve_filters(&["Project Lead"]);
        let both = resolver.resolve_filters(&["Buyer", "Project Lead"]);

        assert_eq!(both.len(), buyer.len() + lead.len());
        assert_eq!(&both[..buyer.len()], &buyer[..]);
        assert_eq!(&both[buyer.len()..], &lead[..]);
    }

    #[test]
    fn duplicate_tokens_are_kept() {
        let resolver = RoleFilterResolver::default();
        let tokens = resolver.resolve_filters(&["Merchandiser", "Project Lead"]);
        let shared = FilterToken::new("Prototype Internal Communication", "Information Gathering");
        let occurrences = tokens.iter().filter(|t| **t == shared).count();
        assert_eq!(occurrences, 2);
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = RoleFilterResolver::default();
        let roles = ["Graphic Designer", "Photographer"];
        let first = resolver.resolve_filters(&roles);
        let second = resolver.resolve_filters(&roles);
        assert_eq!(first, second);
    }

    #[test]
    fn first_tokens_follow_table_order() {
        let resolver = RoleFilterResolver::default();
        let tokens = resolver.resolve_filters(&["Editor"]);
        let rendered: Vec<String> = tokens.iter().map(FilterToken::render).collect();
        assert_eq!(
            rendered,
            [
                "'Product Instruction Manual':'Task Processing'",
                "'Product Instruction Manual':'Approval Review'",
                "'Product Copy':'Approval Review'",
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        let resolver = RoleFilterResolver::default();
        let none: [&str; 0] = [];
        assert!(resolver.resolve_filters(&none).is_empty());
    }
}
