use anyhow::{anyhow, Result};
use clap::values_t;
use serde::Serialize;
use tracing::debug;
use crate::args::Args;
use crate::props;

#[derive(Debug, Serialize)]
pub struct Property {
    pub name:  String,
    pub value: Option<String>,
}

pub fn get(args: Args<'_, '_>) -> Result<()> {
    let names  = values_t!(args, "name", String)?;
    let output = args.arg::<String>("output")?;

    debug!("querying {} properties", names.len());

    let report = names.into_iter().map(|name| {
        let value = props::get(&name);
        Property { name, value }
    }).collect::<Vec<_>>();

    match output.as_str() {
        "text" => print(&report),
        "json" => println!("{}", serde_json::to_string(&report)?),
        "yaml" => print!("{}", serde_yaml::to_string(&report)?),
        format => return Err(anyhow!("unsupported format: {format}")),
    }

    Ok(())
}

fn print(report: &[Property]) {
    for Property { name, value } in report {
        match value {
            Some(value) => println!("{name} = {value}"),
            None        => println!("{name} is not set"),
        }
    }
}
