mod config;
mod encode;
mod error;
mod html;
mod model;
mod parser;
mod text;

pub use config::{Config, LayoutConfig, PageConfig};
pub use encode::encode;
pub use error::{Error, ParseError};
pub use model::{CheckList, CheckLists, Item};

use std::fs;
use std::path::Path;

/// Parse checklist source text into checklists, colours and comments.
pub fn parse(source: &str) -> Result<CheckLists, ParseError> {
    parser::parse(source)
}

/// Render parsed checklists to an HTML document.
pub fn render(checklists: &CheckLists, config: &Config) -> String {
    html::render(checklists, config)
}

/// Convert checklist source text to HTML.
pub fn checklist_to_html(source: &str, config: &Config) -> Result<String, ParseError> {
    let checklists = parse(source)?;
    Ok(render(&checklists, config))
}

/// Read a checklist file, convert it and write the HTML to `output`.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<(), Error> {
    let source = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let html = checklist_to_html(&source, config)?;

    fs::write(output, html).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })
}
