use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The project's designated lead role, granted implicitly to the lead user.
pub const PROJECT_LEAD_ROLE: &str = "Project Lead";

// ---------------------------------------------------------------------------
// Collaborator traits
// ---------------------------------------------------------------------------

/// Supplies the role names a user holds on a project.
pub trait RoleMembershipSource {
    /// Explicitly assigned roles, in membership order. Unknown users or
    /// projects yield an empty list.
    fn project_roles(&self, user: &str, project_key: &str) -> Vec<String>;
}

/// Supplies per-project lead metadata.
pub trait ProjectLeadSource {
    /// `None` when the project key does not resolve to a known project.
    fn project_lead(&self, project_key: &str) -> Option<String>;
}

/// All roles a user holds on a project: explicit memberships first, then the
/// synthetic "Project Lead" role when the user is the project's lead.
pub fn held_roles(
    user: &str,
    project_key: &str,
    membership: &dyn RoleMembershipSource,
    leads: &dyn ProjectLeadSource,
) -> Vec<String> {
    let mut roles = membership.project_roles(user, project_key);
    if leads.project_lead(project_key).as_deref() == Some(user) {
        roles.push(PROJECT_LEAD_ROLE.to_string());
    }
    roles
}

// ---------------------------------------------------------------------------
// ProjectDirectory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub lead: String,
    #[serde(default)]
    pub members: IndexMap<String, Vec<String>>,
}

/// In-memory directory of projects, leads, and role memberships, loaded from
/// a YAML file. Implements both collaborator traits for hosts that have no
/// directory of their own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDirectory {
    #[serde(default)]
    pub projects: IndexMap<String, ProjectEntry>,
}

impl ProjectDirectory {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let directory: ProjectDirectory = serde_yaml::from_str(&data)?;
        Ok(directory)
    }
}

impl RoleMembershipSource for ProjectDirectory {
    fn project_roles(&self, user: &str, project_key: &str) -> Vec<String> {
        self.projects
            .get(project_key)
            .and_then(|p| p.members.get(user))
            .cloned()
            .unwrap_or_default()
    }
}

impl ProjectLeadSource for ProjectDirectory {
    fn project_lead(&self, project_key: &str) -> Option<String> {
        self.projects.get(project_key).map(|p| p.lead.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
