use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env
    })
}

/// Render an embedded Jinja source with strict undefined handling.
pub fn render_str<S: Serialize>(
    template: &str,
    context: S,
    asset_name: &str,
) -> Result<String, AppError> {
    environment().render_str(template, context).map_err(|err| AppError::AssetRender {
        asset: asset_name.to_string(),
        reason: err.to_string(),
    })
}
