//! The declaration collector.
//!
//! The collector is an explicit builder: definition closures receive a
//! `&mut Collector` and call its methods, so there is no implicit receiver
//! and no global state. Nested scopes (groups, outline sections) are pushed
//! before the closure runs and popped afterwards, including on the error
//! path.

use crate::declare::{
    Declarations, GroupDeclaration, OutlineNode, OutlineRequest, PageDeclaration, PageSpec,
};
use crate::ComposeError;
use almanac_types::Params;
use itertools::Itertools;

/// Pluggable page-type title lookup used for `outline()` pages.
pub trait PageTitleSource {
    fn title_for(&self, page_type: &str, params: &Params) -> Option<String>;
}

/// Options for a `group` block.
#[derive(Debug, Clone, Default)]
pub struct GroupOptions {
    pub cycle: bool,
    /// When set, the group's entries are wrapped in an outline section with
    /// this title.
    pub outline: Option<String>,
}

impl GroupOptions {
    pub fn cycling() -> Self {
        Self {
            cycle: true,
            outline: None,
        }
    }

    pub fn outlined(mut self, title: impl Into<String>) -> Self {
        self.outline = Some(title.into());
        self
    }
}

/// Destination of an outline section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionDest {
    /// Non-clickable header.
    None,
    /// Resolved after the block: the first child's destination, if any
    /// children exist.
    FirstChild,
    Key(String),
}

/// Records the ordered page/group/outline declarations of one definition.
/// Single-threaded and non-reentrant; one collector per build.
pub struct Collector<'a> {
    titles: Option<&'a dyn PageTitleSource>,
    pages: Vec<PageDeclaration>,
    groups: Vec<GroupDeclaration>,
    outline: Vec<OutlineNode>,
    open_group: Option<usize>,
    section_stack: Vec<(OutlineNode, SectionDest)>,
}

impl<'a> Collector<'a> {
    pub fn new() -> Self {
        Self {
            titles: None,
            pages: Vec::new(),
            groups: Vec::new(),
            outline: Vec::new(),
            open_group: None,
            section_stack: Vec::new(),
        }
    }

    pub fn with_titles(titles: &'a dyn PageTitleSource) -> Self {
        Self {
            titles: Some(titles),
            ..Self::new()
        }
    }

    /// Declares a page. Returns the page's destination key so definitions
    /// can refer back to it (outline entries, cross-links).
    pub fn page(&mut self, spec: PageSpec) -> String {
        let decl = spec.into_declaration();
        let key = decl.destination_key();

        if let Some(index) = self.open_group {
            self.groups[index].pages.push(key.clone());
        }
        if let Some(title) = self.outline_title(&decl, &key) {
            self.attach(OutlineNode {
                title,
                destination: Some(key.clone()),
                children: Vec::new(),
            });
        }
        self.pages.push(decl);
        key
    }

    /// Declares a named group around `block`. Pages declared inside the
    /// block are appended to the group in order.
    pub fn group<F>(
        &mut self,
        name: impl Into<String>,
        options: GroupOptions,
        block: F,
    ) -> Result<(), ComposeError>
    where
        F: FnOnce(&mut Self) -> Result<(), ComposeError>,
    {
        let name = name.into();
        if let Some(open) = self.open_group {
            return Err(ComposeError::NestedGroup(
                name,
                self.groups[open].name.clone(),
            ));
        }

        self.groups.push(GroupDeclaration {
            name,
            pages: Vec::new(),
            cycle: options.cycle,
        });
        self.open_group = Some(self.groups.len() - 1);

        let result = match options.outline {
            Some(title) => self.outline_section(title, SectionDest::FirstChild, block),
            None => block(self),
        };
        self.open_group = None;
        result
    }

    /// Appends an outline entry to the active section, or to the root list
    /// when no section is open.
    pub fn outline_entry(&mut self, dest: impl Into<String>, title: impl Into<String>) {
        self.attach(OutlineNode {
            title: title.into(),
            destination: Some(dest.into()),
            children: Vec::new(),
        });
    }

    /// Opens an outline section around `block`. Sections nest; the scope is
    /// popped when the block finishes, even on error.
    pub fn outline_section<F>(
        &mut self,
        title: impl Into<String>,
        dest: SectionDest,
        block: F,
    ) -> Result<(), ComposeError>
    where
        F: FnOnce(&mut Self) -> Result<(), ComposeError>,
    {
        let destination = match &dest {
            SectionDest::Key(key) => Some(key.clone()),
            _ => None,
        };
        self.section_stack.push((
            OutlineNode {
                title: title.into(),
                destination,
                children: Vec::new(),
            },
            dest,
        ));

        let result = block(self);

        if let Some((mut node, dest)) = self.section_stack.pop() {
            if dest == SectionDest::FirstChild {
                node.destination = node.children.first().and_then(|c| c.destination.clone());
            }
            self.attach(node);
        }
        result
    }

    /// Finishes the declare pass and hands over the recorded lists.
    pub fn finish(self) -> Declarations {
        Declarations {
            pages: self.pages,
            groups: self.groups,
            outline: self.outline,
        }
    }

    fn attach(&mut self, node: OutlineNode) {
        match self.section_stack.last_mut() {
            Some((section, _)) => section.children.push(node),
            None => self.outline.push(node),
        }
    }

    fn outline_title(&self, decl: &PageDeclaration, key: &str) -> Option<String> {
        match &decl.outline {
            OutlineRequest::None => None,
            OutlineRequest::Titled(title) => Some(title.clone()),
            OutlineRequest::Auto => Some(
                self.titles
                    .and_then(|t| t.title_for(&decl.page_type, &decl.params))
                    .unwrap_or_else(|| humanize_key(key)),
            ),
        }
    }
}

impl Default for Collector<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fallback outline title: the destination key with its separators replaced
/// by spaces and each word capitalized.
fn humanize_key(key: &str) -> String {
    key.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}
