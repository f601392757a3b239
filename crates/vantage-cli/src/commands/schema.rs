use anyhow::bail;
use vantage_core::schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `vtg schema`. Runs before config is loaded, so it works anywhere.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    let Some(type_name) = args.type_name.as_deref() else {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    };

    match registry.get(type_name) {
        // Schemas are always JSON; the table layout would flatten them.
        Some(schema) => output(schema, flags.format.json_or_raw()),
        None => bail!(
            "unknown schema type '{type_name}'; available: {}",
            registry.names().collect::<Vec<_>>().join(", ")
        ),
    }
}
