use super::blocks::*;
use super::common::BlockCommon;
use crate::codec::{discriminated_union, EmptyObject};
use crate::types::{BlockId, RichText};
use serde::{Deserialize, Serialize};

/// A node in a page's content tree.
///
/// Blocks are append-only. Once a block is attached under a parent the API
/// refuses to edit or delete it through this surface; nothing here enforces
/// that, the server does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(flatten)]
    pub kind: BlockKind,
}

discriminated_union! {
    /// Block payload, selected by the block's `type`.
    pub enum BlockKind : "type" {
        Paragraph(TextBlockContent) = "paragraph",
        Heading1(TextBlockContent) = "heading_1",
        Heading2(TextBlockContent) = "heading_2",
        Heading3(TextBlockContent) = "heading_3",
        BulletedListItem(TextBlockContent) = "bulleted_list_item",
        NumberedListItem(TextBlockContent) = "numbered_list_item",
        ToDo(ToDoContent) = "to_do",
        Toggle(TextBlockContent) = "toggle",
        Quote(TextBlockContent) = "quote",
        Code(CodeContent) = "code",
        Equation(EquationContent) = "equation",
        Divider(EmptyObject) = "divider",
        Bookmark(BookmarkContent) = "bookmark",
        ChildPage(ChildPageContent) = "child_page",
        ChildDatabase(ChildDatabaseContent) = "child_database",
        /// A block the API itself cannot express.
        Unsupported(EmptyObject) = "unsupported",
    }
}

impl Block {
    /// A client-side block ready to append; the server fills identity and timestamps.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            common: BlockCommon::new(),
            kind,
        }
    }

    pub fn paragraph(text: Vec<RichText>) -> Self {
        Self::new(BlockKind::Paragraph(TextBlockContent::new(text)))
    }

    pub fn heading_1(text: Vec<RichText>) -> Self {
        Self::new(BlockKind::Heading1(TextBlockContent::new(text)))
    }

    pub fn heading_2(text: Vec<RichText>) -> Self {
        Self::new(BlockKind::Heading2(TextBlockContent::new(text)))
    }

    pub fn heading_3(text: Vec<RichText>) -> Self {
        Self::new(BlockKind::Heading3(TextBlockContent::new(text)))
    }

    pub fn bulleted_list_item(text: Vec<RichText>) -> Self {
        Self::new(BlockKind::BulletedListItem(TextBlockContent::new(text)))
    }

    pub fn numbered_list_item(text: Vec<RichText>) -> Self {
        Self::new(BlockKind::NumberedListItem(TextBlockContent::new(text)))
    }

    pub fn toggle(text: Vec<RichText>) -> Self {
        Self::new(BlockKind::Toggle(TextBlockContent::new(text)))
    }

    pub fn quote(text: Vec<RichText>) -> Self {
        Self::new(BlockKind::Quote(TextBlockContent::new(text)))
    }

    pub fn to_do(text: Vec<RichText>, checked: bool) -> Self {
        Self::new(BlockKind::ToDo(ToDoContent {
            text,
            checked: Some(checked),
            ..ToDoContent::default()
        }))
    }

    /// Nests `children` under this block. Kinds that cannot hold children
    /// are returned unchanged.
    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        if let Some(slot) = self.kind.children_slot() {
            *slot = Some(children);
        }
        self
    }

    pub fn id(&self) -> Option<&BlockId> {
        self.common.id.as_ref()
    }

    /// The block's wire `type`.
    pub fn block_type(&self) -> &str {
        crate::codec::Discriminated::tag(&self.kind)
    }

    /// Whether the server reported nested content. Children are not returned
    /// inline by retrieval; fetch them with the block-children operation.
    pub fn has_children(&self) -> bool {
        self.common.has_children.unwrap_or(false)
    }

    /// Children carried inline, which is only the case for blocks built for an append.
    pub fn children(&self) -> Option<&[Block]> {
        match &self.kind {
            BlockKind::Paragraph(c)
            | BlockKind::Heading1(c)
            | BlockKind::Heading2(c)
            | BlockKind::Heading3(c)
            | BlockKind::BulletedListItem(c)
            | BlockKind::NumberedListItem(c)
            | BlockKind::Toggle(c)
            | BlockKind::Quote(c) => c.children.as_deref(),
            BlockKind::ToDo(c) => c.children.as_deref(),
            _ => None,
        }
    }

    pub fn rich_text(&self) -> Option<&[RichText]> {
        match &self.kind {
            BlockKind::Paragraph(c)
            | BlockKind::Heading1(c)
            | BlockKind::Heading2(c)
            | BlockKind::Heading3(c)
            | BlockKind::BulletedListItem(c)
            | BlockKind::NumberedListItem(c)
            | BlockKind::Toggle(c)
            | BlockKind::Quote(c) => Some(&c.text),
            BlockKind::ToDo(c) => Some(&c.text),
            BlockKind::Code(c) => Some(&c.text),
            _ => None,
        }
    }
}

impl BlockKind {
    fn children_slot(&mut self) -> Option<&mut Option<Vec<Block>>> {
        match self {
            BlockKind::Paragraph(c)
            | BlockKind::Heading1(c)
            | BlockKind::Heading2(c)
            | BlockKind::Heading3(c)
            | BlockKind::BulletedListItem(c)
            | BlockKind::NumberedListItem(c)
            | BlockKind::Toggle(c)
            | BlockKind::Quote(c) => Some(&mut c.children),
            BlockKind::ToDo(c) => Some(&mut c.children),
            _ => None,
        }
    }
}
