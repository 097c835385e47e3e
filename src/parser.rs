use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace, warn};

use crate::error::ParseError;
use crate::model::{CheckList, CheckLists, Item};
use crate::text::{Line, join_to_end, read_lines, split_trimmed};

/// Inline colour toggles such as `\red\` left inside a field
static INLINE_COLOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-z]*\\").expect("inline colour pattern"));

/// Directive kinds recognised in the first token of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    CheckList,
    /// `void` items take every remaining token as text, `colour` items
    /// carry `\name\` escapes
    Item { void: bool, colour: bool },
    DefineColour,
    Ignored,
    Comment,
    Unknown,
}

impl Directive {
    fn classify(cmd: &str) -> Self {
        match cmd {
            "sw_checklist" => Directive::CheckList,
            "sw_item" | "sw_iteminfo" | "sw_remark" => Directive::Item {
                void: false,
                colour: false,
            },
            "sw_item_c" => Directive::Item {
                void: false,
                colour: true,
            },
            "sw_itemvoid" => Directive::Item {
                void: true,
                colour: false,
            },
            "sw_itemvoid_c" => Directive::Item {
                void: true,
                colour: true,
            },
            "sw_define_colour" => Directive::DefineColour,
            "sw_show" => Directive::Ignored,
            _ if cmd.starts_with("sw_continue") || cmd.starts_with("sw_rcolsize") => {
                Directive::Ignored
            }
            _ if cmd.starts_with('#') => Directive::Comment,
            _ => Directive::Unknown,
        }
    }
}

#[derive(Default)]
struct ParseState {
    checklists: CheckLists,
    // Index of the checklist items are appended to
    current: Option<usize>,
}

/// Parse checklist source text into the document model.
pub fn parse(source: &str) -> Result<CheckLists, ParseError> {
    let mut state = ParseState::default();

    for line in read_lines(source) {
        if line.tokens.is_empty() {
            continue;
        }
        process_line(&line, &mut state)?;
    }

    Ok(state.checklists)
}

fn process_line(line: &Line, state: &mut ParseState) -> Result<(), ParseError> {
    let cmd = line.tokens[0].as_str();

    match Directive::classify(cmd) {
        Directive::CheckList => {
            let id = line.tokens.get(1).ok_or_else(|| ParseError::MissingArgument {
                line: line.number,
                directive: cmd.to_string(),
            })?;
            let name = line.tokens.get(2).unwrap_or(id).clone();
            debug!(line = line.number, %name, "starting checklist");

            let lists = &mut state.checklists.checklists;
            lists.push(CheckList {
                name,
                items: Vec::new(),
            });
            state.current = Some(lists.len() - 1);
        }

        Directive::Item { void, colour } => {
            let index = state.current.ok_or_else(|| ParseError::ItemOutsideCheckList {
                line: line.number,
                directive: cmd.to_string(),
            })?;
            if let Some(item) = parse_item(&line.tokens, void, colour) {
                state.checklists.checklists[index].items.push(item);
            }
        }

        Directive::DefineColour => define_colour(line, &mut state.checklists),

        Directive::Ignored => {
            trace!(line = line.number, cmd, "ignoring directive");
        }

        Directive::Comment => {
            let comment = line.line.get(1..).unwrap_or_default();
            if !comment.starts_with("sw_") {
                state.checklists.comments.push(comment.to_string());
            }
        }

        Directive::Unknown => {
            return Err(ParseError::UnknownDirective {
                line: line.number,
                name: cmd.to_string(),
            });
        }
    }

    Ok(())
}

/// Build an item from a directive's tokens. Returns `None` when the
/// directive has no payload or the payload holds no fields, as in
/// `sw_item:|`.
fn parse_item(tokens: &[String], void: bool, colour: bool) -> Option<Item> {
    if tokens.len() < 2 {
        return None;
    }
    let payload = if void {
        join_to_end(tokens, 1)
    } else {
        tokens[1].clone()
    };

    let mut fields = split_trimmed(&payload, '|').into_iter();
    let mut item = Item {
        text: fields.next()?,
        check: fields.next().unwrap_or_default(),
        ..Item::default()
    };

    if colour {
        item.text_colour = take_colour(&mut item.text);
        item.check_colour = take_colour(&mut item.check);
    }

    Some(item)
}

/// Pull a leading `\name\` colour reference out of `field`.
///
/// Any inline `\name\` toggles left in the value are dropped since only
/// one colour per cell can be shown.
fn take_colour(field: &mut String) -> Option<String> {
    let rest = field.strip_prefix('\\')?;

    let (colour, value) = match rest.split_once('\\') {
        Some((name, value)) => (Some(name.to_string()), value),
        None => (None, rest),
    };

    *field = INLINE_COLOUR.replace_all(value, "").into_owned();
    colour
}

fn define_colour(line: &Line, checklists: &mut CheckLists) {
    let [_, name, rgb] = line.tokens.as_slice() else {
        warn!(
            line = line.number,
            "sw_define_colour expects a name and an r,g,b value, ignoring"
        );
        return;
    };

    if checklists.colours.contains_key(name) {
        warn!(line = line.number, %name, "colour already defined, keeping the first");
        return;
    }

    let hex = rgb_to_hex(rgb);
    debug!(line = line.number, %name, %hex, "defined colour");
    checklists.colours.insert(name.clone(), hex);
}

/// Convert `r,g,b` fractions in `[0, 1]` to `#rrggbb`.
///
/// Unparseable or missing channels count as 0.
fn rgb_to_hex(rgb: &str) -> String {
    let channels = split_trimmed(rgb, ',');
    let channel = |i: usize| -> u8 {
        let value = channels.get(i).map_or(0.0, |c| leading_number(c));
        // `as` truncates toward zero and saturates, NaN becomes 0
        (value * 255.0).clamp(0.0, 255.0) as u8
    };
    format!("#{:02x}{:02x}{:02x}", channel(0), channel(1), channel(2))
}

/// Value of the longest prefix of `text` that reads as a number, so
/// `0.5f` is 0.5. No numeric prefix gives 0.
fn leading_number(text: &str) -> f64 {
    text.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(0.0)
}
