/// Rules written to the generated project's `.gitignore`.
pub const GITIGNORE_CONTENT: &str = ".DS_Store\n.venv\n*.sqlite3\n__pycache__\n";
