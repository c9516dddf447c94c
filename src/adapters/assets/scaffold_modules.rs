use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};
use minijinja::context;
use serde::Serialize;

use crate::adapters::template::render_str;
use crate::domain::{AppError, AppSpec, ProjectConfig, ProjectLayout};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

const BACKEND_MODULES: [&str; 2] = ["views.py", "urls.py"];
const APP_MODULES: [&str; 4] = ["models.py", "views.py", "admin.py", "urls.py"];

/// A rendered Python module and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Serialize)]
struct AppRoute<'a> {
    name: &'a str,
}

fn asset(path: &str) -> Result<&'static str, AppError> {
    SCAFFOLD_DIR.get_file(path).and_then(|file| file.contents_utf8()).ok_or_else(|| {
        AppError::AssetRender { asset: path.to_string(), reason: "missing embedded asset".into() }
    })
}

fn render_asset<S: Serialize>(asset_path: &str, ctx: S) -> Result<String, AppError> {
    render_str(asset(asset_path)?, ctx, asset_path)
}

/// Backend `views.py` and `urls.py`, routing to every configured app.
pub fn backend_modules(
    config: &ProjectConfig,
    layout: &ProjectLayout,
) -> Result<Vec<GeneratedFile>, AppError> {
    let apps: Vec<AppRoute> =
        config.apps.iter().map(|app| AppRoute { name: app.name.as_str() }).collect();

    BACKEND_MODULES
        .iter()
        .map(|module| {
            let asset_path = format!("backend/{}.j2", module);
            let content = render_asset(&asset_path, context! { apps => &apps })?;
            Ok(GeneratedFile { path: layout.backend_dir().join(module), content })
        })
        .collect()
}

/// `models.py`, `views.py`, `admin.py` and `urls.py` for one app.
pub fn app_modules(app: &AppSpec, app_dir: &Path) -> Result<Vec<GeneratedFile>, AppError> {
    let model = app.model_name();
    let item = model.to_lowercase();

    APP_MODULES
        .iter()
        .map(|module| {
            let content = render_asset(
                &format!("app/{}.j2", module),
                context! { app => app.name.as_str(), model => &model, item => &item },
            )?;
            Ok(GeneratedFile { path: app_dir.join(module), content })
        })
        .collect()
}
