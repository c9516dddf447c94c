//! Line-level rewrites of a settings document.
//!
//! Every operation scans the whole document independently and reports a
//! [`RuleOutcome`]. A missing marker never fails here; the caller decides
//! whether that is a warning or an error.

use serde::Serialize;

use super::document::SettingsDocument;

pub const ALLOWED_HOSTS: &str = "ALLOWED_HOSTS";
pub const TEMPLATE_DIRS_KEY: &str = "'DIRS':";
pub const EMPTY_TEMPLATE_DIRS: &str = "'DIRS': []";
pub const STATICFILES_DIRS: &str = "STATICFILES_DIRS";
pub const INSTALLED_APPS: &str = "INSTALLED_APPS";

const INSTALLED_ENTRY_INDENT: &str = "    ";
const DEFAULT_TEMPLATE_DIRS_INDENT: &str = "            ";

/// Result of applying one rule to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// The document changed; `lines` counts rewritten or inserted lines.
    Applied { lines: usize },
    /// The marker was found and the document already satisfied the rule.
    Unchanged,
    /// No line carried the marker the rule looks for.
    MarkerMissing { marker: String },
}

impl RuleOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, RuleOutcome::Applied { .. })
    }

    fn missing(marker: &str) -> Self {
        RuleOutcome::MarkerMissing { marker: marker.to_string() }
    }
}

/// Quote `items` as a Python list literal of single-quoted strings.
pub fn python_str_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| python_str(item)).collect();
    format!("[{}]", quoted.join(", "))
}

fn python_str(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn is_import_statement(line: &str) -> bool {
    line.starts_with("import ") || (line.starts_with("from ") && line.contains(" import "))
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Ensure `import <module>` is present.
///
/// Presence is exact trimmed-line equality. A missing import goes before the
/// first top-level import statement, or at the start of the document.
pub fn ensure_import(doc: &mut SettingsDocument, module: &str) -> RuleOutcome {
    let statement = format!("import {}", module);
    if doc.any(|line| line.trim() == statement) {
        return RuleOutcome::Unchanged;
    }
    let index = doc.position(is_import_statement).unwrap_or(0);
    doc.insert(index, statement);
    RuleOutcome::Applied { lines: 1 }
}

/// Overwrite the first `ALLOWED_HOSTS` line with the canonical assignment.
pub fn set_allowed_hosts(doc: &mut SettingsDocument, hosts: &[String]) -> RuleOutcome {
    let Some(index) = doc.position(|line| line.trim().starts_with(ALLOWED_HOSTS)) else {
        return RuleOutcome::missing(ALLOWED_HOSTS);
    };
    let canonical = format!("{} = {}", ALLOWED_HOSTS, python_str_list(hosts));
    if doc.lines()[index] == canonical {
        return RuleOutcome::Unchanged;
    }
    doc.replace(index, canonical);
    RuleOutcome::Applied { lines: 1 }
}

/// Rewrite every template `'DIRS':` line that is empty or does not mention
/// all of `dirs`.
///
/// The matched line's indentation is kept. Lines are visited in document
/// order and the scan never stops early.
pub fn set_template_dirs(doc: &mut SettingsDocument, dirs: &[String]) -> RuleOutcome {
    if !doc.any(|line| line.contains(TEMPLATE_DIRS_KEY)) {
        return RuleOutcome::missing(TEMPLATE_DIRS_KEY);
    }

    let mut rewritten = 0;
    for line in doc.lines_mut() {
        if !line.contains(TEMPLATE_DIRS_KEY) {
            continue;
        }
        let is_empty = line.contains(EMPTY_TEMPLATE_DIRS);
        let mentions_all = dirs.iter().all(|dir| line.contains(dir.as_str()));
        if !is_empty && mentions_all {
            continue;
        }
        let indent = match leading_whitespace(line) {
            "" => DEFAULT_TEMPLATE_DIRS_INDENT,
            indent => indent,
        };
        let canonical = format!("{}{} {},", indent, TEMPLATE_DIRS_KEY, python_str_list(dirs));
        if *line != canonical {
            *line = canonical;
            rewritten += 1;
        }
    }

    if rewritten == 0 { RuleOutcome::Unchanged } else { RuleOutcome::Applied { lines: rewritten } }
}

fn static_dirs_block(dir: &str) -> [String; 4] {
    [
        String::new(),
        format!("{} = [", STATICFILES_DIRS),
        format!("    os.path.join(BASE_DIR, {})", python_str(dir)),
        "]".to_string(),
    ]
}

/// Append a `STATICFILES_DIRS` block unless one is already declared.
///
/// Existing lines are never touched.
pub fn ensure_static_dirs(doc: &mut SettingsDocument, dir: &str) -> RuleOutcome {
    if doc.any(|line| line.contains(STATICFILES_DIRS)) {
        return RuleOutcome::Unchanged;
    }
    append_static_dirs_block(doc, dir)
}

/// Append a `STATICFILES_DIRS` block unconditionally.
pub fn append_static_dirs_block(doc: &mut SettingsDocument, dir: &str) -> RuleOutcome {
    let block = static_dirs_block(dir);
    let lines = block.len();
    doc.append(block);
    RuleOutcome::Applied { lines }
}

fn installed_entry(module: &str) -> String {
    format!("{}{},", INSTALLED_ENTRY_INDENT, python_str(module))
}

/// Insert `'<module>',` right after the first `INSTALLED_APPS` line.
///
/// No duplicate check: calling this twice yields two entries. Use
/// [`ensure_installed_module`] when re-runs must converge.
pub fn append_installed_module(doc: &mut SettingsDocument, module: &str) -> RuleOutcome {
    let Some(index) = doc.position(|line| line.trim().starts_with(INSTALLED_APPS)) else {
        return RuleOutcome::missing(INSTALLED_APPS);
    };
    doc.insert(index + 1, installed_entry(module));
    RuleOutcome::Applied { lines: 1 }
}

/// Like [`append_installed_module`], but skips modules already listed.
///
/// An entry naming the module or a dotted path inside it (an app config such
/// as `'posts.apps.PostsConfig'`) counts as listed. The list runs from the `INSTALLED_APPS` line to the first line whose
/// trimmed text is `]`, or ends on the marker line itself when it closes there.
pub fn ensure_installed_module(doc: &mut SettingsDocument, module: &str) -> RuleOutcome {
    let Some(start) = doc.position(|line| line.trim().starts_with(INSTALLED_APPS)) else {
        return RuleOutcome::missing(INSTALLED_APPS);
    };

    let names_module = |line: &str| {
        ['\'', '"'].iter().any(|quote| {
            line.contains(&format!("{q}{module}{q}", q = quote))
                || line.contains(&format!("{q}{module}.", q = quote))
        })
    };
    let mut listed = false;
    for (offset, line) in doc.lines()[start..].iter().enumerate() {
        if names_module(line) {
            listed = true;
            break;
        }
        let closes_list = if offset == 0 { line.contains(']') } else { line.trim() == "]" };
        if closes_list {
            break;
        }
    }

    if listed {
        return RuleOutcome::Unchanged;
    }
    append_installed_module(doc, module)
}
