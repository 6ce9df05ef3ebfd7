//! Page templates.
//!
//! Four named templates render every HTML response:
//!
//! - `view` - a page with its rendered body
//! - `edit` - the edit form with the raw body
//! - `wiki_link` - a link to one page, included by `all`
//! - `all` - the list of every page title
//!
//! Templates are parsed once at startup into an immutable [`Templates`] value.
//! Built-in templates are compiled into the binary; a template directory
//! containing all four `<name>.html` files replaces them.

use std::path::{Path, PathBuf};

use minijinja::{Environment, Value, context};
use wiki_storage::Page;

/// Template file names, in load order.
const TEMPLATE_FILES: [&str; 4] = ["wiki_link.html", "view.html", "edit.html", "all.html"];

/// Built-in template sources, matching [`TEMPLATE_FILES`].
const BUILTIN_TEMPLATES: [(&str, &str); 4] = [
    ("wiki_link.html", include_str!("../templates/wiki_link.html")),
    ("view.html", include_str!("../templates/view.html")),
    ("edit.html", include_str!("../templates/edit.html")),
    ("all.html", include_str!("../templates/all.html")),
];

/// Template loading and rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// A template file could not be read.
    #[error("Failed to read template {}: {source}", path.display())]
    Read {
        /// Template file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Template syntax or rendering error.
    #[error("{0}")]
    Template(#[from] minijinja::Error),
}

/// Parsed templates, shared read-only by all handlers.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Parse the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Template`] if a built-in template fails to parse.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        for (name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Read and parse `<name>.html` for each template from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Read`] if a file is missing or unreadable, and
    /// [`TemplateError::Template`] if one fails to parse.
    pub fn from_dir(dir: &Path) -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        for name in TEMPLATE_FILES {
            let path = dir.join(name);
            let source = std::fs::read_to_string(&path)
                .map_err(|source| TemplateError::Read { path, source })?;
            env.add_template_owned(name, source)?;
        }
        tracing::debug!(dir = %dir.display(), "Loaded templates");
        Ok(Self { env })
    }

    /// Load templates from `dir` if given, otherwise the built-in set.
    ///
    /// # Errors
    ///
    /// See [`Templates::builtin`] and [`Templates::from_dir`].
    pub fn load(dir: Option<&Path>) -> Result<Self, TemplateError> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::builtin(),
        }
    }

    /// Render the `view` template.
    ///
    /// `rendered_body` is trusted markup and is inserted without escaping.
    pub fn render_view(&self, page: &Page, rendered_body: String) -> Result<String, TemplateError> {
        self.render(
            "view.html",
            context! {
                title => page.title.as_str(),
                body => Value::from_safe_string(rendered_body),
            },
        )
    }

    /// Render the `edit` template with the raw, escaped body.
    pub fn render_edit(&self, page: &Page) -> Result<String, TemplateError> {
        self.render(
            "edit.html",
            context! {
                title => page.title.as_str(),
                body => page.body_text(),
            },
        )
    }

    /// Render the `all` template for a list of titles.
    pub fn render_all(&self, titles: &[String]) -> Result<String, TemplateError> {
        self.render("all.html", context! { titles => titles })
    }

    fn render(&self, name: &str, ctx: Value) -> Result<String, TemplateError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use wiki_storage::Title;

    use super::*;

    fn page(title: &str, body: &str) -> Page {
        Page::new(Title::new(title).unwrap(), body)
    }

    #[test]
    fn test_builtin_templates_parse() {
        assert!(Templates::builtin().is_ok());
    }

    #[test]
    fn test_render_view_inserts_body_unescaped() {
        let templates = Templates::builtin().unwrap();

        let html = templates
            .render_view(&page("Home", ""), "<p>Hello <a href=\"/view/X\">X</a></p>".to_owned())
            .unwrap();

        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains("<p>Hello <a href=\"/view/X\">X</a></p>"));
        assert!(html.contains("href=\"/edit/Home\""));
    }

    #[test]
    fn test_render_edit_escapes_body() {
        let templates = Templates::builtin().unwrap();

        let html = templates
            .render_edit(&page("Home", "<script>alert(1)</script> & [[Link]]"))
            .unwrap();

        assert!(html.contains("action=\"/save/Home\""));
        assert!(html.contains("&lt;script&gt;alert(1)"));
        assert!(html.contains("&amp; [[Link]]"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_edit_empty_page() {
        let templates = Templates::builtin().unwrap();

        let html = templates
            .render_edit(&Page::empty(Title::new("New").unwrap()))
            .unwrap();

        assert!(html.contains("<textarea name=\"body\" rows=\"20\" cols=\"80\"></textarea>"));
    }

    #[test]
    fn test_render_all_uses_wiki_link() {
        let templates = Templates::builtin().unwrap();

        let html = templates
            .render_all(&["Alpha".to_owned(), "Beta".to_owned()])
            .unwrap();

        assert!(html.contains("<li><a href=\"/view/Alpha\">Alpha</a></li>"));
        assert!(html.contains("<li><a href=\"/view/Beta\">Beta</a></li>"));
    }

    #[test]
    fn test_from_dir_loads_custom_templates() {
        let temp_dir = tempfile::tempdir().unwrap();
        for (name, source) in [
            ("wiki_link.html", "[{{ title }}]"),
            ("view.html", "V:{{ title }}:{{ body }}"),
            ("edit.html", "E:{{ title }}:{{ body }}"),
            ("all.html", "{% for title in titles %}{% include \"wiki_link.html\" %}{% endfor %}"),
        ] {
            std::fs::write(temp_dir.path().join(name), source).unwrap();
        }

        let templates = Templates::from_dir(temp_dir.path()).unwrap();

        assert_eq!(
            templates
                .render_view(&page("Home", ""), "<p>x</p>".to_owned())
                .unwrap(),
            "V:Home:<p>x</p>"
        );
        assert_eq!(
            templates.render_edit(&page("Home", "<b>")).unwrap(),
            "E:Home:&lt;b&gt;"
        );
        assert_eq!(
            templates
                .render_all(&["A".to_owned(), "B".to_owned()])
                .unwrap(),
            "[A][B]"
        );
    }

    #[test]
    fn test_from_dir_missing_template() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("view.html"), "{{ title }}").unwrap();

        let err = Templates::from_dir(temp_dir.path()).unwrap_err();

        assert!(matches!(err, TemplateError::Read { .. }));
        assert!(err.to_string().contains("wiki_link.html"));
    }

    #[test]
    fn test_from_dir_syntax_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        for name in TEMPLATE_FILES {
            std::fs::write(temp_dir.path().join(name), "{{ title }}").unwrap();
        }
        std::fs::write(temp_dir.path().join("view.html"), "{% if %}").unwrap();

        let err = Templates::from_dir(temp_dir.path()).unwrap_err();

        assert!(matches!(err, TemplateError::Template(_)));
    }

    #[test]
    fn test_render_error_is_reported() {
        let temp_dir = tempfile::tempdir().unwrap();
        for name in TEMPLATE_FILES {
            std::fs::write(temp_dir.path().join(name), "{{ title }}").unwrap();
        }
        std::fs::write(temp_dir.path().join("all.html"), "{% include \"nope.html\" %}").unwrap();
        let templates = Templates::from_dir(temp_dir.path()).unwrap();

        let err = templates.render_all(&[]).unwrap_err();

        assert!(matches!(err, TemplateError::Template(_)));
    }
}
