use super::{manifest::Manifest, BlueprintBuilder};
use crate::config::Template;
use crate::constants::MANIFEST_FILE;
use crate::error::Result;

const ENTRY_PATH: &str = "src/index.js";

const INDEX_JS: &str = include_str!("../../templates/cli/index.js");
const COMMANDS_JS: &str = include_str!("../../templates/cli/commands.js");

pub(super) fn build(builder: &mut BlueprintBuilder<'_>) -> Result<()> {
    builder.directories(&["src", "utils", "commands"]);
    builder.render(ENTRY_PATH, INDEX_JS)?;
    builder.render("commands/index.js", COMMANDS_JS)?;

    let context = builder.context();
    let manifest = Manifest::new(
        context.project_name.as_str(),
        "A command-line application",
        ENTRY_PATH,
        context.author.as_str(),
    )
    .bin(&context.project_name, ENTRY_PATH)
    .script("start", "node src/index.js");
    builder.manifest(MANIFEST_FILE, &manifest)?;

    builder.common_files(Template::Cli)
}
