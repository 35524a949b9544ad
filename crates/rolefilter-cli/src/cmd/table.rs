use crate::output::{print_json, print_table};
use anyhow::bail;
use rolefilter_core::table::{RoleStepTable, StatusStepMap};

pub fn run(role: Option<&str>, json: bool) -> anyhow::Result<()> {
    let table = RoleStepTable::product_launch();

    match role {
        Some(name) => {
            let Some(map) = table.role(name) else {
                bail!("unknown role: {name}");
            };
            if json {
                return print_json(&serde_json::json!({ "role": name, "statuses": map }));
            }
            print_table(&["status", "steps"], status_rows(map));
        }
        None => {
            if json {
                return print_json(&table);
            }
            let mut rows = Vec::new();
            for (name, map) in table.roles() {
                for (status, steps) in map {
                    rows.push(vec![name.to_string(), status.clone(), steps.join(", ")]);
                }
            }
            print_table(&["role", "status", "steps"], rows);
        }
    }
    Ok(())
}

fn status_rows(map: &StatusStepMap) -> Vec<Vec<String>> {
    map.iter()
        .map(|(status, steps)| vec![status.clone(), steps.join(", ")])
        .collect()
}
