use crate::directory::{held_roles, ProjectLeadSource, RoleMembershipSource};
use crate::error::{FilterError, Result};
use crate::resolver::RoleFilterResolver;
use crate::token::FilterToken;
use tracing::debug;

/// The query-function surface the host engine invokes: one required
/// project-key argument, producing the acting user's filter literals.
pub struct TaskFilterFunction<'a> {
    resolver: RoleFilterResolver,
    membership: &'a dyn RoleMembershipSource,
    leads: &'a dyn ProjectLeadSource,
}

impl<'a> TaskFilterFunction<'a> {
    pub const MIN_EXPECTED_ARGS: usize = 1;

    pub fn new(
        resolver: RoleFilterResolver,
        membership: &'a dyn RoleMembershipSource,
        leads: &'a dyn ProjectLeadSource,
    ) -> Self {
        Self {
            resolver,
            membership,
            leads,
        }
    }

    /// Argument-count validation, owned by the invocation boundary rather
    /// than the resolver. Exactly one argument (the project key) is
    /// accepted.
    pub fn validate(&self, args: &[String]) -> Result<()> {
        if args.len() != Self::MIN_EXPECTED_ARGS {
            return Err(FilterError::MissingArgument {
                expected: Self::MIN_EXPECTED_ARGS,
                got: args.len(),
            });
        }
        Ok(())
    }

    /// Filter literals for `user` on the project named by `args[0]`.
    ///
    /// An unknown project key is not an error: it yields an empty result,
    /// the same as a user with no matching roles.
    pub fn values(&self, user: &str, args: &[String]) -> Result<Vec<FilterToken>> {
        self.validate(args)?;
        let project_key = args[0].as_str();

        if self.leads.project_lead(project_key).is_none() {
            debug!(project_key, "project key did not resolve; no filters");
            return Ok(Vec::new());
        }

        let roles = held_roles(user, project_key, self.membership, self.leads);
        let tokens = self.resolver.resolve_filters(&roles);
        for token in &tokens {
            debug!(%token, "add filter");
        }
        Ok(tokens)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
