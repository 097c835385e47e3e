use std::collections::BTreeMap;

/// One row of a checklist
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub text: String,
    pub text_colour: Option<String>,
    /// Empty means the row has no check column and spans the table
    pub check: String,
    pub check_colour: Option<String>,
}

impl Item {
    pub fn new(text: impl Into<String>, check: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            check: check.into(),
            ..Self::default()
        }
    }

    pub fn has_check(&self) -> bool {
        !self.check.is_empty()
    }
}

/// A named group of items, rendered as one table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckList {
    pub name: String,
    pub items: Vec<Item>,
}

/// Everything read from one checklist source file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckLists {
    pub checklists: Vec<CheckList>,
    /// Colour name to `#rrggbb`
    pub colours: BTreeMap<String, String>,
    pub comments: Vec<String>,
}

impl CheckLists {
    /// Look up the hex value of a colour reference, if it was defined.
    pub fn colour(&self, name: Option<&str>) -> Option<&str> {
        name.and_then(|name| self.colours.get(name)).map(String::as_str)
    }
}
