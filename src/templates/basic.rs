use super::{manifest::Manifest, BlueprintBuilder};
use crate::config::Template;
use crate::constants::MANIFEST_FILE;
use crate::error::Result;

const INDEX_JS: &str = include_str!("../../templates/basic/index.js");
const HELPERS_JS: &str = include_str!("../../templates/basic/helpers.js");

pub(super) fn build(builder: &mut BlueprintBuilder<'_>) -> Result<()> {
    builder.directories(&["src", "utils", "tests"]);
    builder.render("src/index.js", INDEX_JS)?;
    builder.render("utils/helpers.js", HELPERS_JS)?;

    let context = builder.context();
    let manifest = Manifest::new(
        context.project_name.as_str(),
        "A basic Node.js project",
        "src/index.js",
        context.author.as_str(),
    )
    .script("start", "node src/index.js")
    .script("test", "echo \"Error: no test specified\" && exit 1");
    builder.manifest(MANIFEST_FILE, &manifest)?;

    builder.common_files(Template::Basic)
}
