//! Tera rendering engine: [`TemplateEngine`] and [`Renderer`].
//!
//! Every non-hidden UTF-8 file under the template directory is loaded, named by
//! its `/`-separated path relative to that directory, so `{% include %}` and
//! `{% extends %}` between them resolve whatever the file extension. Binary
//! files (images, fonts) are skipped. Autoescaping follows Tera defaults
//! (`.html`, `.htm`, `.xml`).

use std::path::{Path, PathBuf};

use tera::Tera;

use cobotics_core::{BuildConfig, SiteData};

use crate::context::SiteContext;
use crate::error::RenderError;
use crate::helpers;

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if is_hidden(&path) {
            continue;
        }
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.is_dir() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    files.sort();

    let mut templates = Vec::with_capacity(files.len());
    for path in files {
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let bytes = std::fs::read(&path).map_err(|e| io_err(&path, e))?;
        let Ok(contents) = String::from_utf8(bytes) else {
            tracing::debug!("skipped non-UTF-8 file {name}");
            continue;
        };
        tracing::debug!("loaded template {name}");
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(template_dir: &Path) -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    helpers::register(&mut tera);
    tera.add_raw_templates(load_templates(template_dir)?)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine over one template directory.
///
/// A missing directory yields an engine with no templates; rendering from it
/// reports [`RenderError::TemplateNotFound`].
pub struct TemplateEngine {
    tera: Tera,
    template_dir: PathBuf,
}

impl TemplateEngine {
    /// Load every template under `template_dir` and register the `json` helper.
    pub fn new(template_dir: &Path) -> Result<Self, RenderError> {
        let tera = build_tera(template_dir)?;
        Ok(TemplateEngine {
            tera,
            template_dir: template_dir.to_path_buf(),
        })
    }

    /// Loaded template names, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render the template `name` against `ctx`.
    pub fn render(&self, name: &str, ctx: &SiteContext) -> Result<String, RenderError> {
        if !self.has_template(name) {
            return Err(RenderError::TemplateNotFound {
                name: name.to_string(),
                dir: self.template_dir.clone(),
            });
        }
        let tera_ctx = ctx.to_tera_context()?;
        let rendered = self.tera.render(name, &tera_ctx)?;
        tracing::debug!("rendered {name} ({} bytes)", rendered.len());
        Ok(rendered)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders the site page described by a [`BuildConfig`].
///
/// Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    engine: TemplateEngine,
    template_name: String,
}

impl Renderer {
    /// Construct a [`Renderer`] for `config.template_name` in `config.template_dir`.
    pub fn new(config: &BuildConfig) -> Result<Self, RenderError> {
        Ok(Renderer {
            engine: TemplateEngine::new(&config.template_dir)?,
            template_name: config.template_name.clone(),
        })
    }

    /// Render the page from loaded site data.
    pub fn render(&self, data: &SiteData) -> Result<String, RenderError> {
        let ctx = SiteContext::from_data(data);
        self.render_with_context(&ctx)
    }

    /// Render the page using a caller-provided [`SiteContext`].
    pub fn render_with_context(&self, ctx: &SiteContext) -> Result<String, RenderError> {
        self.engine.render(&self.template_name, ctx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn template_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, body) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, body).unwrap();
        }
        dir
    }

    #[test]
    fn nested_templates_use_forward_slash_names() {
        let dir = template_dir(&[
            ("index.html", "x"),
            ("partials/card.html", "y"),
            (".DS_Store", "junk"),
            (".cache/stale.html", "z"),
        ]);
        fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G', 0xff, 0xfe]).unwrap();
        let engine = TemplateEngine::new(dir.path()).unwrap();
        assert_eq!(engine.template_names(), ["index.html", "partials/card.html"]);
    }

    #[test]
    fn any_extension_is_a_template() {
        let dir = template_dir(&[
            ("index.html.jinja2", "{% include \"footer\" %}|{{ skills | length }}"),
            ("footer", "foot"),
            ("page.tmpl", "tmpl"),
        ]);
        let engine = TemplateEngine::new(dir.path()).unwrap();
        assert_eq!(engine.template_names(), ["footer", "index.html.jinja2", "page.tmpl"]);
        let ctx = SiteContext::default();
        assert_eq!(engine.render("index.html.jinja2", &ctx).unwrap(), "foot|0");
        assert_eq!(engine.render("page.tmpl", &ctx).unwrap(), "tmpl");
    }

    #[test]
    fn missing_template_is_template_not_found() {
        let dir = template_dir(&[("other.html", "x")]);
        let engine = TemplateEngine::new(dir.path()).unwrap();
        let err = engine.render("index.html", &SiteContext::default()).unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound { .. }), "got: {err}");
        assert!(err.to_string().contains("index.html"));
    }

    #[test]
    fn missing_directory_is_template_not_found_on_render() {
        let dir = TempDir::new().unwrap();
        let engine = TemplateEngine::new(&dir.path().join("nope")).unwrap();
        assert!(engine.template_names().is_empty());
        let err = engine.render("index.html", &SiteContext::default()).unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound { .. }));
    }

    #[test]
    fn syntax_error_fails_engine_construction() {
        let dir = template_dir(&[("index.html", "{% for x in %}")]);
        let err = TemplateEngine::new(dir.path()).err().expect("parse must fail");
        assert!(matches!(err, RenderError::Tera(_)), "got: {err}");
    }

    #[test]
    fn include_resolves_sibling_templates() {
        let dir = template_dir(&[
            ("index.html", "<ul>{% for c in challenges %}{% include \"partials/item.html\" %}{% endfor %}</ul>"),
            ("partials/item.html", "<li>{{ c }}</li>"),
        ]);
        let engine = TemplateEngine::new(dir.path()).unwrap();
        let ctx = SiteContext {
            challenges: vec!["a".into(), "b".into()],
            ..SiteContext::default()
        };
        let out = engine.render("index.html", &ctx).unwrap();
        assert_eq!(out, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn html_templates_are_autoescaped() {
        let dir = template_dir(&[("index.html", "{{ skills.0 }}")]);
        let engine = TemplateEngine::new(dir.path()).unwrap();
        let ctx = SiteContext {
            skills: vec!["<b>weld</b>".into()],
            ..SiteContext::default()
        };
        let out = engine.render("index.html", &ctx).unwrap();
        assert_eq!(out, "&lt;b&gt;weld&lt;&#x2F;b&gt;");
    }

    #[test]
    fn renderer_uses_configured_template() {
        let dir = template_dir(&[("page.txt", "{{ missions | length }} missions")]);
        let config = BuildConfig {
            template_dir: dir.path().to_path_buf(),
            template_name: "page.txt".to_string(),
            ..BuildConfig::default()
        };
        let renderer = Renderer::new(&config).unwrap();
        let data = SiteData {
            missions: vec!["m1".into(), "m2".into()],
            ..SiteData::default()
        };
        assert_eq!(renderer.render(&data).unwrap(), "2 missions");
    }
}
