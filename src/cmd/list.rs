use std::collections::BTreeMap;
use anyhow::{anyhow, Result};
use crate::args::Args;
use crate::props;

pub fn list(args: Args<'_, '_>) -> Result<()> {
    let output = args.arg::<String>("output")?;

    let mut table = props::snapshot();

    if args.is_present("env") {
        for (name, value) in props::environ() {
            table.entry(name).or_insert(value);
        }
    }

    match output.as_str() {
        "text" => print(&table),
        "json" => println!("{}", serde_json::to_string(&table)?),
        "yaml" => print!("{}", serde_yaml::to_string(&table)?),
        format => return Err(anyhow!("unsupported format: {format}")),
    }

    Ok(())
}

fn print(table: &BTreeMap<String, String>) {
    let width = table.keys().map(String::len).max().unwrap_or(0);

    for (name, value) in table {
        println!("{name:<width$} {value}");
    }
}
