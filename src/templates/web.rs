use super::{manifest::Manifest, BlueprintBuilder};
use crate::config::Template;
use crate::constants::MANIFEST_FILE;
use crate::error::Result;

const INDEX_HTML: &str = include_str!("../../templates/web/index.html");
const STYLE_CSS: &str = include_str!("../../templates/web/style.css");
const MAIN_JS: &str = include_str!("../../templates/web/main.js");

pub(super) fn build(builder: &mut BlueprintBuilder<'_>) -> Result<()> {
    builder.directories(&["src", "src/css", "src/js", "public", "assets"]);
    builder.render("src/index.html", INDEX_HTML)?;
    builder.render("src/css/style.css", STYLE_CSS)?;
    builder.render("src/js/main.js", MAIN_JS)?;

    // A static site has nothing to run, start only explains how to view it.
    let context = builder.context();
    let manifest = Manifest::new(
        context.project_name.as_str(),
        "A static website",
        "src/index.html",
        context.author.as_str(),
    )
    .script("start", "echo \"Open src/index.html in your browser\"");
    builder.manifest(MANIFEST_FILE, &manifest)?;

    builder.common_files(Template::Web)
}
