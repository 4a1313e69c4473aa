use serde::Serialize;

/// One normalized unit of plan detail content.
///
/// The serialized `type` tag matches the Notion block kind it was built
/// from, so the front end can dispatch on it directly. Each variant only
/// carries the fields meaningful for its kind; blocks of a kind we do not
/// recognize normalize to `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentNode {
    Paragraph {
        content: String,
        children: Vec<ContentNode>,
    },
    #[serde(rename = "heading_1")]
    Heading1 { content: String },
    #[serde(rename = "heading_2")]
    Heading2 { content: String },
    #[serde(rename = "heading_3")]
    Heading3 { content: String },
    BulletedListItem {
        content: String,
        children: Vec<ContentNode>,
    },
    NumberedListItem {
        content: String,
        children: Vec<ContentNode>,
    },
    ToDo {
        content: String,
        checked: bool,
        children: Vec<ContentNode>,
    },
    Toggle {
        content: String,
        children: Vec<ContentNode>,
    },
    Code { content: String, language: String },
    Quote {
        content: String,
        children: Vec<ContentNode>,
    },
    Callout {
        content: String,
        children: Vec<ContentNode>,
    },
    Divider,
    Image { content: String, url: String },
    Bookmark { content: String, url: String },
    LinkPreview { content: String, url: String },
    Table { children: Vec<ContentNode> },
    TableRow { content: String },
    Empty,
}

impl ContentNode {
    /// Child nodes, or an empty slice for leaf kinds.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Paragraph { children, .. }
            | ContentNode::BulletedListItem { children, .. }
            | ContentNode::NumberedListItem { children, .. }
            | ContentNode::ToDo { children, .. }
            | ContentNode::Toggle { children, .. }
            | ContentNode::Quote { children, .. }
            | ContentNode::Callout { children, .. }
            | ContentNode::Table { children } => children,
            _ => &[],
        }
    }
}
