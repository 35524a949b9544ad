use crate::output::print_json;
use rolefilter_core::directory::held_roles;
use std::path::Path;

pub fn run(directory: Option<&Path>, user: &str, project_key: &str, json: bool) -> anyhow::Result<()> {
    let dir = super::load_directory(directory)?;
    let roles = held_roles(user, project_key, &dir, &dir);

    if json {
        return print_json(&serde_json::json!({
            "user": user,
            "project_key": project_key,
            "roles": roles,
        }));
    }

    if roles.is_empty() {
        println!("{user} holds no roles on {project_key}.");
    } else {
        println!("{user} on {project_key}:");
        for role in &roles {
            println!("  {role}");
        }
    }
    Ok(())
}
