use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A page template copied from the local `files/` tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Home,
    About,
    Layout,
    #[serde(alias = "post_list")]
    PostsList,
    PostPage,
}

impl TemplateKind {
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Home => "home",
            TemplateKind::About => "about",
            TemplateKind::Layout => "layout",
            TemplateKind::PostsList => "posts_list",
            TemplateKind::PostPage => "post_page",
        }
    }

    /// Source file name inside `files/`.
    pub fn source_file(self) -> String {
        format!("{}_template.html", self.name())
    }

    /// Subdirectory of the templates directory, if any.
    pub fn subdir(self) -> Option<&'static str> {
        match self {
            TemplateKind::PostsList | TemplateKind::PostPage => Some("posts"),
            _ => None,
        }
    }

    /// Target path relative to the templates directory.
    pub fn target_path(self) -> PathBuf {
        let file = format!("{}.html", self.name());
        match self.subdir() {
            Some(dir) => PathBuf::from(dir).join(file),
            None => PathBuf::from(file),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
