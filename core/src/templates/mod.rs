mod content;

use crate::disk::{ensure_dir, write_file};
use crate::error::{Result, ScaffoldError};
use handlebars::Handlebars;
use serde_json::{Value, json};
use std::path::Path;

pub const ICON: &[u8] = include_bytes!("../../assets/icon.png");

pub const ARTIFACTS: [&str; 10] = [
    "package.json",
    ".gitignore",
    "README.md",
    "index.js",
    "manifest.json",
    "views/main.js",
    "views/404.js",
    "assets/icon.png",
    "assets/css/base.css",
    "assets/css/gr8.js",
];

/// The project name is the target's final path segment. Paths like `.` have
/// none, so the canonical path is tried before giving up.
pub fn project_name(dir: &Path) -> String {
    if let Some(name) = dir.file_name() {
        return name.to_string_lossy().into_owned();
    }

    std::fs::canonicalize(dir)
        .ok()
        .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "app".to_string())
}

const README: &str = "README.md";
const WEB_MANIFEST: &str = "manifest.json";
const MAIN_VIEW: &str = "views/main.js";
const NOT_FOUND_VIEW: &str = "views/404.js";

fn registry() -> Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    // Descriptions are written verbatim; HTML escaping would mangle them.
    handlebars.register_escape_fn(handlebars::no_escape);

    for (name, body) in [
        (README, content::README),
        (WEB_MANIFEST, content::WEB_MANIFEST),
        (MAIN_VIEW, content::MAIN_VIEW),
        (NOT_FOUND_VIEW, content::NOT_FOUND_VIEW),
    ] {
        handlebars
            .register_template_string(name, body)
            .map_err(|e| ScaffoldError::Render {
                template: name.to_string(),
                source: Box::new(e),
            })?;
    }

    Ok(handlebars)
}

/// Renders one of the registered templates. Substituted values are never
/// expanded again, so placeholder syntax in a description stays literal.
pub fn render(template: &str, data: &Value) -> Result<String> {
    registry()?
        .render(template, data)
        .map_err(|e| ScaffoldError::Render {
            template: template.to_string(),
            source: Box::new(e),
        })
}

fn package_json(name: &str) -> String {
    let manifest = json!({
        "name": name,
        "version": "1.0.0",
        "private": true,
        "scripts": {
            "build": "bankai build index.js",
            "create": "choo-scaffold",
            "inspect": "bankai inspect index.js",
            "start": "bankai start index.js",
            "test": "standard && npm run test-deps",
            "test-deps": "dependency-check . && dependency-check . --extra --no-dev -i tachyons"
        }
    });
    format!("{:#}\n", manifest)
}

pub async fn write_package(dir: &Path) -> Result<()> {
    let name = project_name(dir);
    write_file(&dir.join("package.json"), package_json(&name)).await
}

pub async fn write_ignore(dir: &Path) -> Result<()> {
    write_file(&dir.join(".gitignore"), content::GITIGNORE).await
}

pub async fn write_readme(dir: &Path, description: &str) -> Result<()> {
    let name = project_name(dir);
    let file = render(README, &json!({ "name": name, "description": description }))?;
    write_file(&dir.join("README.md"), file).await
}

pub async fn write_index(dir: &Path) -> Result<()> {
    write_file(&dir.join("index.js"), content::INDEX).await
}

pub async fn write_manifest(dir: &Path, description: &str) -> Result<()> {
    let name = project_name(dir);
    let file = render(WEB_MANIFEST, &json!({ "name": name, "description": description }))?;
    write_file(&dir.join("manifest.json"), file).await
}

pub async fn write_main_view(dir: &Path) -> Result<()> {
    let views = dir.join("views");
    let file = render(MAIN_VIEW, &json!({ "name": project_name(dir) }))?;
    ensure_dir(&views).await?;
    write_file(&views.join("main.js"), file).await
}

pub async fn write_not_found_view(dir: &Path) -> Result<()> {
    let views = dir.join("views");
    let file = render(NOT_FOUND_VIEW, &json!({ "name": project_name(dir) }))?;
    ensure_dir(&views).await?;
    write_file(&views.join("404.js"), file).await
}

pub async fn write_base_css(dir: &Path) -> Result<()> {
    let css = dir.join("assets").join("css");
    ensure_dir(&css).await?;
    write_file(&css.join("base.css"), content::BASE_CSS).await
}

pub async fn write_gr8_css(dir: &Path) -> Result<()> {
    let css = dir.join("assets").join("css");
    ensure_dir(&css).await?;
    write_file(&css.join("gr8.js"), content::GR8_CSS).await
}

pub async fn write_icon(dir: &Path) -> Result<()> {
    let assets = dir.join("assets");
    ensure_dir(&assets).await?;
    write_file(&assets.join("icon.png"), ICON).await
}

/// Runs every emitter concurrently. Shared subdirectories go through
/// `create_dir_all`, so racing creations are harmless. The first error is
/// returned, but writes already handed to the blocking pool still land.
pub async fn emit_all(dir: &Path, description: &str) -> Result<()> {
    tokio::try_join!(
        write_package(dir),
        write_ignore(dir),
        write_readme(dir, description),
        write_index(dir),
        write_manifest(dir, description),
        write_main_view(dir),
        write_not_found_view(dir),
        write_icon(dir),
        write_base_css(dir),
        write_gr8_css(dir),
    )?;

    tracing::info!(
        path = %dir.display(),
        files = ARTIFACTS.len(),
        "Templates written"
    );
    Ok(())
}
