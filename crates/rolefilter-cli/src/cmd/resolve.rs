use crate::output::print_json;
use rolefilter_core::function::TaskFilterFunction;
use rolefilter_core::resolver::RoleFilterResolver;
use std::path::Path;

pub fn run(directory: Option<&Path>, user: &str, args: &[String], json: bool) -> anyhow::Result<()> {
    let dir = super::load_directory(directory)?;
    let function = TaskFilterFunction::new(RoleFilterResolver::default(), &dir, &dir);
    let tokens = function.values(user, args)?;

    if json {
        let out: Vec<_> = tokens
            .iter()
            .map(|t| {
                serde_json::json!({
                    "status": t.status,
                    "step": t.step,
                    "literal": t.render(),
                })
            })
            .collect();
        return print_json(&out);
    }

    if tokens.is_empty() {
        println!("No filters.");
    } else {
        for token in &tokens {
            println!("{token}");
        }
    }
    Ok(())
}
