//! # Get Command Implementation
//!
//! Prints the value of one item. List values are printed joined by the
//! separator, or a single element is picked with `--field`.

use anyhow::{bail, Result};
use clap::Args;

use acis_manifest::value::Value;

use crate::cli::Context;

/// Get an item from the manifest
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Key of the item
    pub key: String,

    /// Which field of a list value to get, starting at 1 (default: all fields)
    #[arg(short, long, value_name = "N")]
    pub field: Option<usize>,

    /// Separator to join list values
    #[arg(short, long, value_name = "SEP", default_value = " ")]
    pub separator: String,
}

/// Render `value` for output, honoring `--field` for lists.
pub fn render(value: &Value, field: Option<usize>, separator: &str) -> Result<String> {
    match (value, field) {
        (Value::List(items), Some(n)) => match n.checked_sub(1).and_then(|i| items.get(i)) {
            Some(item) => Ok(item.to_string()),
            None => bail!("field {} out of range (item has {} fields)", n, items.len()),
        },
        _ => Ok(value.join(separator)),
    }
}

/// Execute the `get` command.
pub fn execute(args: GetArgs, ctx: &Context) -> Result<()> {
    let manifest = ctx.manifest()?;
    let value = manifest.get(&args.key)?;
    let text = render(&value, args.field, &args.separator)?;
    if ctx.brief {
        println!("{}", text);
    } else {
        println!("{}: {}", args.key, text);
    }
    Ok(())
}
