use super::{manifest::Manifest, BlueprintBuilder};
use crate::config::Template;
use crate::constants::MANIFEST_FILE;
use crate::error::Result;

const SERVER_JS: &str = include_str!("../../templates/api/server.js");
const ROUTES_JS: &str = include_str!("../../templates/api/routes.js");
const CONTROLLER_JS: &str = include_str!("../../templates/api/controller.js");
const CONFIG_JS: &str = include_str!("../../templates/api/config.js");

pub(super) fn build(builder: &mut BlueprintBuilder<'_>) -> Result<()> {
    builder.directories(&[
        "src",
        "src/routes",
        "src/controllers",
        "src/models",
        "src/middleware",
        "utils",
        "config",
    ]);
    builder.render("src/server.js", SERVER_JS)?;
    builder.render("src/routes/index.js", ROUTES_JS)?;
    builder.render("src/controllers/indexController.js", CONTROLLER_JS)?;
    builder.render("config/index.js", CONFIG_JS)?;

    let context = builder.context();
    let manifest = Manifest::new(
        context.project_name.as_str(),
        "An HTTP API server",
        "src/server.js",
        context.author.as_str(),
    )
    .script("start", "node src/server.js")
    .script("dev", "node --watch src/server.js");
    builder.manifest(MANIFEST_FILE, &manifest)?;

    builder.common_files(Template::Api)
}
