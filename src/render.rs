use crate::error::{GlossaryError, Result};
use askama::Template;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";
pub const DEFAULT_INDEX_TITLE: &str = "Sample Glossary";

// Definitions are already cross-linked markup, so nothing is escaped.
#[derive(Template)]
#[template(
    source = r#"<html>
<head>
<title>{{ term }}</title>
</head>
<body>
<h1 style="color:red;"><i>{{ term }}</i></h1>
<p>{{ definition }}</p>
<hr>
<p>Return to <a href="index.html">Index</a></p>
</body>
</html>"#,
    ext = "html",
    escape = "none"
)]
struct TermTemplate<'a> {
    term: &'a str,
    definition: &'a str,
}

#[derive(Template)]
#[template(
    source = r#"<html>
<head>
<title>{{ title }}</title>
</head>
<body>
<h2>{{ title }}</h2>
<hr>
<h3>Index</h3>
<ul>
{% for term in terms -%}
<li><a href="{{ term }}.html">{{ term }}</a></li>
{% endfor -%}
</ul>
</body>
</html>"#,
    ext = "html",
    escape = "none"
)]
struct IndexTemplate<'a> {
    title: &'a str,
    terms: &'a [&'a str],
}

pub fn term_file_name(term: &str) -> String {
    format!("{term}.html")
}

/// Renders the page for one term. `linked_definition` is inserted verbatim.
pub fn render_term_page(term: &str, linked_definition: &str) -> Result<String> {
    TermTemplate {
        term,
        definition: linked_definition,
    }
    .render()
    .map_err(|source| GlossaryError::Render {
        page: term_file_name(term),
        source,
    })
}

/// Renders the index page; `sorted_terms` are listed in the order given.
pub fn render_index_page(title: &str, sorted_terms: &[&str]) -> Result<String> {
    IndexTemplate {
        title,
        terms: sorted_terms,
    }
    .render()
    .map_err(|source| GlossaryError::Render {
        page: INDEX_FILE.to_string(),
        source,
    })
}

/// `dir` + `/` + `file_name`. Unlike `Path::join`, a file name that looks
/// absolute still lands under `dir`.
pub fn page_path(dir: &Path, file_name: &str) -> PathBuf {
    let mut path = dir.as_os_str().to_owned();
    path.push("/");
    path.push(file_name);
    PathBuf::from(path)
}

/// Creates (or truncates) `dir/file_name` and writes `html` to it. The
/// directory must already exist. The file is closed before returning.
pub fn write_page(dir: &Path, file_name: &str, html: &str) -> Result<PathBuf> {
    let path = page_path(dir, file_name);
    let file = File::create(&path).map_err(|err| GlossaryError::io(&path, err))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(html.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|err| GlossaryError::io(&path, err))?;
    Ok(path)
}
