use crate::config::Config;
use crate::encode::encode;
use crate::model::{CheckList, CheckLists, Item};

const NBSP: &str = "&nbsp;";

/// Render checklists as a standalone HTML document.
pub fn render(checklists: &CheckLists, config: &Config) -> String {
    let mut out = String::new();

    emit_head(config, &mut out);
    out.push_str("<body>\n");

    if let Some(title) = config.page.title.as_deref().filter(|t| !t.is_empty()) {
        out.push_str(&format!("<h1 class=\"title\">{}</h1>\n", encode(title)));
    }

    out.push_str("<div class=\"checkListContainer\">\n");
    for comment in &checklists.comments {
        out.push_str(&format!("<!-- {} -->\n", encode(comment)));
    }

    for checklist in &checklists.checklists {
        emit_table(checklist, checklists, &mut out);
        if config.layout.trailing_rule {
            out.push_str("<hr>\n");
        }
    }

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn emit_head(config: &Config, out: &mut String) {
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");
    out.push_str("html * { font-family: monospace; }\n");
    out.push_str(
        "table, th, td { border: 1px solid black; border-collapse: collapse; margin-bottom: 20px; }\n",
    );
    out.push_str("tr:nth-child(odd) { background-color: #eeeeee; }\n");
    out.push_str(".title { font-size: 2em; }\n");
    out.push_str(&format!(
        ".checkListContainer {{ column-count: {}; }}\n",
        config.page.columns.max(1)
    ));
    out.push_str(".checkList { width: 90%; page-break-inside: avoid; }\n");
    out.push_str(
        ".checkListTitle { background-color: #000; color: #ffffff; font-size: 1.3em; }\n",
    );
    out.push_str(".itemInfo { text-align: center; }\n");
    out.push_str(".itemText { text-align: left; }\n");
    out.push_str(".itemCheck { text-align: right; width: 1%; white-space: nowrap; }\n");
    out.push_str("</style>\n</head>\n");
}

fn emit_table(checklist: &CheckList, checklists: &CheckLists, out: &mut String) {
    out.push_str("<table class=\"checkList\">\n");
    out.push_str(&format!(
        "<tr><th colspan=\"2\" class=\"checkListTitle\">{}</th></tr>\n",
        encode(&checklist.name)
    ));

    let items = &checklist.items;
    for (i, item) in items.iter().enumerate() {
        // A text of only dashes is a separator, drawn as a blank cell
        let text = if item.text.chars().all(|c| c == '-') {
            ""
        } else {
            item.text.as_str()
        };

        if item.has_check() {
            out.push_str("<tr>");
            emit_cell(text, item.text_colour.as_deref(), "itemText", 1, checklists, out);
            emit_cell(&item.check, item.check_colour.as_deref(), "itemCheck", 1, checklists, out);
            out.push_str("</tr>\n");
        } else if !text.is_empty() || !is_suppressed_blank(items, i) {
            out.push_str("<tr>");
            emit_cell(text, item.text_colour.as_deref(), "itemInfo", 2, checklists, out);
            out.push_str("</tr>\n");
        }
    }

    out.push_str("</table>\n");
}

/// Blank rows only survive between two checked rows; next to an info row
/// (or another blank) they are dropped so spacing does not pile up.
fn is_suppressed_blank(items: &[Item], i: usize) -> bool {
    let prev_unchecked = i > 0 && !items[i - 1].has_check();
    let next_unchecked = items.get(i + 1).is_some_and(|next| !next.has_check());
    prev_unchecked || next_unchecked
}

fn emit_cell(
    text: &str,
    colour: Option<&str>,
    class: &str,
    colspan: u32,
    checklists: &CheckLists,
    out: &mut String,
) {
    out.push_str("<td");
    if colspan > 1 {
        out.push_str(&format!(" colspan=\"{colspan}\""));
    }
    if let Some(hex) = checklists.colour(colour) {
        out.push_str(&format!(" bgcolor=\"{hex}\""));
    }
    out.push_str(&format!(" class=\"{class}\">"));

    if text.is_empty() {
        out.push_str(NBSP);
    } else {
        out.push_str(&encode(text));
    }
    out.push_str("</td>");
}
