use super::{manifest::Manifest, BlueprintBuilder};
use crate::config::Template;
use crate::error::Result;

const FRONTEND_SERVER_JS: &str = include_str!("../../templates/fullstack/frontend/server.js");
const FRONTEND_INDEX_HTML: &str = include_str!("../../templates/fullstack/frontend/index.html");
const FRONTEND_APP_JS: &str = include_str!("../../templates/fullstack/frontend/App.js");
const FRONTEND_API_JS: &str = include_str!("../../templates/fullstack/frontend/api.js");
const FRONTEND_HEADER_JS: &str = include_str!("../../templates/fullstack/frontend/Header.js");
const FRONTEND_HOME_JS: &str = include_str!("../../templates/fullstack/frontend/Home.js");
const FRONTEND_MAIN_CSS: &str = include_str!("../../templates/fullstack/frontend/main.css");

const BACKEND_SERVER_JS: &str = include_str!("../../templates/fullstack/backend/server.js");
const BACKEND_ROUTES_JS: &str = include_str!("../../templates/fullstack/backend/routes.js");
const BACKEND_CONTROLLER_JS: &str =
    include_str!("../../templates/fullstack/backend/itemController.js");
const BACKEND_MODEL_JS: &str = include_str!("../../templates/fullstack/backend/Item.js");
const BACKEND_CONFIG_JS: &str = include_str!("../../templates/fullstack/backend/config.js");
const BACKEND_ENV: &str = include_str!("../../templates/fullstack/backend/env");

pub(super) fn build(builder: &mut BlueprintBuilder<'_>) -> Result<()> {
    builder.directories(&[
        "frontend/src/components",
        "frontend/src/pages",
        "frontend/src/styles",
        "frontend/src/services",
        "frontend/public",
        "backend/routes",
        "backend/controllers",
        "backend/models",
        "backend/middleware",
        "backend/config",
    ]);

    let context = builder.context();
    let frontend = Manifest::new(
        format!("{}-frontend", context.project_name),
        format!("Frontend for {}", context.project_name),
        "server.js".to_string(),
        context.author.clone(),
    )
    .script("start", "node server.js");
    let backend = Manifest::new(
        format!("{}-backend", context.project_name),
        format!("Backend API for {}", context.project_name),
        "server.js".to_string(),
        context.author.clone(),
    )
    .script("start", "node server.js")
    .script("dev", "node --watch server.js")
    .dependency("cors", "^2.8.5")
    .dependency("dotenv", "^16.4.5")
    .dependency("express", "^4.19.2");

    builder.manifest("frontend/package.json", &frontend)?;
    builder.render("frontend/server.js", FRONTEND_SERVER_JS)?;
    builder.render("frontend/public/index.html", FRONTEND_INDEX_HTML)?;
    builder.render("frontend/src/App.js", FRONTEND_APP_JS)?;
    builder.render("frontend/src/services/api.js", FRONTEND_API_JS)?;
    builder.render("frontend/src/components/Header.js", FRONTEND_HEADER_JS)?;
    builder.render("frontend/src/pages/Home.js", FRONTEND_HOME_JS)?;
    builder.render("frontend/src/styles/main.css", FRONTEND_MAIN_CSS)?;

    builder.manifest("backend/package.json", &backend)?;
    builder.render("backend/server.js", BACKEND_SERVER_JS)?;
    builder.render("backend/routes/index.js", BACKEND_ROUTES_JS)?;
    builder.render("backend/controllers/itemController.js", BACKEND_CONTROLLER_JS)?;
    builder.render("backend/models/Item.js", BACKEND_MODEL_JS)?;
    builder.render("backend/config/config.js", BACKEND_CONFIG_JS)?;
    builder.render("backend/.env", BACKEND_ENV)?;

    builder.common_files(Template::Fullstack)
}
