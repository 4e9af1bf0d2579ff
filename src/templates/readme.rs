//! README generation shared by all templates.

use crate::config::Template;
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::templates::TemplateContext;

const README: &str = include_str!("../../templates/shared/README.md");

/// Per-template README content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadmeInfo {
    pub description: &'static str,
    /// Shell commands shown under "Getting Started", run from the project root
    pub instructions: &'static str,
    /// Directory tree below the project root line
    pub tree: &'static str,
}

pub fn readme_info(template: Template) -> ReadmeInfo {
    match template {
        Template::Basic => ReadmeInfo {
            description: "A basic Node.js project.",
            instructions: "npm start",
            tree: r"├── src/
│   └── index.js
├── utils/
│   └── helpers.js
├── tests/
├── .gitignore
├── package.json
└── README.md",
        },
        Template::Web => ReadmeInfo {
            description: "A static website built with HTML, CSS and JavaScript.",
            instructions: "# open src/index.html in your browser, or serve it:
npx serve src",
            tree: r"├── src/
│   ├── css/
│   │   └── style.css
│   ├── js/
│   │   └── main.js
│   └── index.html
├── public/
├── assets/
├── .gitignore
├── package.json
└── README.md",
        },
        Template::Api => ReadmeInfo {
            description: "An HTTP API server built on the Node.js http module.",
            instructions: "npm start        # http://localhost:3000
npm run dev      # restart on file changes",
            tree: r"├── src/
│   ├── controllers/
│   │   └── indexController.js
│   ├── middleware/
│   ├── models/
│   ├── routes/
│   │   └── index.js
│   └── server.js
├── config/
│   └── index.js
├── utils/
├── .gitignore
├── package.json
└── README.md",
        },
        Template::Cli => ReadmeInfo {
            description: "A command-line application.",
            instructions: "node src/index.js hello
node src/index.js version
npm link         # install the {{ project_name }} command globally",
            tree: r"├── src/
│   └── index.js
├── commands/
│   └── index.js
├── utils/
├── .gitignore
├── package.json
└── README.md",
        },
        Template::Fullstack => ReadmeInfo {
            description: "A full-stack application with a browser frontend and an Express backend.",
            instructions: "cd backend && npm install && npm run dev
# in a second terminal
cd frontend && npm start",
            tree: r"├── frontend/
│   ├── public/
│   │   └── index.html
│   ├── src/
│   │   ├── components/
│   │   │   └── Header.js
│   │   ├── pages/
│   │   │   └── Home.js
│   │   ├── services/
│   │   │   └── api.js
│   │   ├── styles/
│   │   │   └── main.css
│   │   └── App.js
│   ├── package.json
│   └── server.js
├── backend/
│   ├── config/
│   │   └── config.js
│   ├── controllers/
│   │   └── itemController.js
│   ├── middleware/
│   ├── models/
│   │   └── Item.js
│   ├── routes/
│   │   └── index.js
│   ├── .env
│   ├── package.json
│   └── server.js
├── .gitignore
└── README.md",
        },
    }
}

fn author_section(author: &str) -> String {
    if author.is_empty() {
        String::new()
    } else {
        format!("\n## Author\n\n{author}\n")
    }
}

/// Renders the README of `template`.
///
/// Instructions may reference context variables, so they are rendered
/// before being placed into the shared layout.
pub fn render_readme(
    template: Template,
    context: &TemplateContext,
    renderer: &dyn TemplateRenderer,
) -> Result<String> {
    let info = readme_info(template);
    let mut values = serde_json::to_value(context)?;
    let instructions = renderer.render(info.instructions, &values)?;

    if let Some(map) = values.as_object_mut() {
        map.insert("description".into(), info.description.into());
        map.insert("instructions".into(), instructions.into());
        map.insert("tree".into(), info.tree.into());
        map.insert("author_section".into(), author_section(&context.author).into());
    }

    renderer.render(README, &values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;

    #[test]
    fn test_readme_mentions_project_and_date() {
        let context = TemplateContext::new("demo", "", "2024-01-15");
        let readme =
            render_readme(Template::Basic, &context, &MiniJinjaRenderer::new()).unwrap();

        assert!(readme.starts_with("# demo\n"));
        assert!(readme.contains("demo/\n├── src/"));
        assert!(readme.contains("on 2024-01-15."));
        assert!(!readme.contains("## Author"));
    }

    #[test]
    fn test_readme_includes_author_when_set() {
        let context = TemplateContext::new("demo", "Jane Doe", "2024-01-15");
        let readme = render_readme(Template::Api, &context, &MiniJinjaRenderer::new()).unwrap();

        assert!(readme.contains("## Author\n\nJane Doe\n"));
    }

    #[test]
    fn test_cli_instructions_name_the_command() {
        let context = TemplateContext::new("greeter", "", "2024-01-15");
        let readme = render_readme(Template::Cli, &context, &MiniJinjaRenderer::new()).unwrap();

        assert!(readme.contains("install the greeter command globally"));
    }
}
