use crate::output::{print_json, print_table};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let site = super::load_site(root)?;
    let entries = site.schedule().entries();
    if json {
        return print_json(&entries);
    }
    let rows = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            vec![
                (i + 1).to_string(),
                e.slug.clone(),
                e.launch_date.clone(),
                e.status.to_string(),
                e.description.clone(),
            ]
        })
        .collect();
    print_table(&["#", "SLUG", "LAUNCH", "STATUS", "DESCRIPTION"], rows);
    Ok(())
}
