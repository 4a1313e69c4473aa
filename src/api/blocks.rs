use futures_util::future::BoxFuture;
use serde_json::Value;

use crate::models::ContentNode;

use super::client::api_call;
use super::error::ApiError;

/// List every child block of `block_id`, draining Notion's cursor
/// pagination. Results are concatenated in the order Notion returns them.
pub async fn list_block_children(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    block_id: &str,
) -> Result<Vec<Value>, ApiError> {
    let endpoint = format!("/blocks/{}/children", block_id);
    let mut blocks = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let mut params = vec![("page_size".to_string(), "100".to_string())];
        if let Some(ref c) = cursor {
            params.push(("start_cursor".to_string(), c.clone()));
        }
        let payload = api_call(
            client,
            api_base_url,
            api_token,
            "GET",
            &endpoint,
            None,
            Some(params),
        )
        .await?;

        if let Some(results) = payload.get("results").and_then(Value::as_array) {
            blocks.extend(results.iter().cloned());
        }

        let has_more = payload
            .get("has_more")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        cursor = payload
            .get("next_cursor")
            .and_then(Value::as_str)
            .map(str::to_string);
        if !has_more || cursor.is_none() {
            return Ok(blocks);
        }
    }
}

/// Fetch and normalize a page's top-level block tree.
pub async fn load_page_content(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    page_id: &str,
) -> Result<Vec<ContentNode>, ApiError> {
    let blocks = list_block_children(client, api_base_url, api_token, page_id).await?;
    let mut nodes = Vec::with_capacity(blocks.len());
    for block in &blocks {
        nodes.push(normalize_block(client, api_base_url, api_token, block).await);
    }
    Ok(nodes)
}

/// Kinds whose nodes carry child content. Only these are worth a
/// child-listing round-trip; leaf and unrecognized kinds never fetch.
fn is_container_kind(kind: &str) -> bool {
    matches!(
        kind,
        "paragraph"
            | "bulleted_list_item"
            | "numbered_list_item"
            | "to_do"
            | "toggle"
            | "quote"
            | "callout"
            | "table"
    )
}

/// Normalize one Notion block into a `ContentNode`.
///
/// Dispatches on the block's `type` tag; text-bearing kinds concatenate
/// their rich-text runs in order. Container kinds flagged with
/// `has_children` get their children fetched and normalized recursively,
/// preserving source order. This function never fails: unrecognized kinds
/// become `Empty`, and a failed child listing degrades to no children
/// (with a warning).
///
/// Boxed because async recursion needs an indirection; depth is bounded by
/// the document tree, which Notion guarantees is acyclic.
pub fn normalize_block<'a>(
    client: &'a reqwest::Client,
    api_base_url: &'a str,
    api_token: &'a str,
    block: &'a Value,
) -> BoxFuture<'a, ContentNode> {
    Box::pin(async move {
        let kind = block.get("type").and_then(Value::as_str).unwrap_or_default();
        let payload = block.get(kind).unwrap_or(&Value::Null);

        let children = if is_container_kind(kind)
            && block
                .get("has_children")
                .and_then(Value::as_bool)
                .unwrap_or(false)
        {
            let id = block.get("id").and_then(Value::as_str).unwrap_or_default();
            match list_block_children(client, api_base_url, api_token, id).await {
                Ok(blocks) => {
                    let mut nodes = Vec::with_capacity(blocks.len());
                    for child in &blocks {
                        nodes.push(normalize_block(client, api_base_url, api_token, child).await);
                    }
                    nodes
                }
                Err(e) => {
                    tracing::warn!(%e, block_id = id, "failed to list child blocks, dropping children");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        match kind {
            "paragraph" => ContentNode::Paragraph {
                content: rich_text_content(payload),
                children,
            },
            "heading_1" => ContentNode::Heading1 {
                content: rich_text_content(payload),
            },
            "heading_2" => ContentNode::Heading2 {
                content: rich_text_content(payload),
            },
            "heading_3" => ContentNode::Heading3 {
                content: rich_text_content(payload),
            },
            "bulleted_list_item" => ContentNode::BulletedListItem {
                content: rich_text_content(payload),
                children,
            },
            "numbered_list_item" => ContentNode::NumberedListItem {
                content: rich_text_content(payload),
                children,
            },
            "to_do" => ContentNode::ToDo {
                content: rich_text_content(payload),
                checked: payload
                    .get("checked")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                children,
            },
            "toggle" => ContentNode::Toggle {
                content: rich_text_content(payload),
                children,
            },
            "code" => ContentNode::Code {
                content: rich_text_content(payload),
                language: payload
                    .get("language")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            "quote" => ContentNode::Quote {
                content: rich_text_content(payload),
                children,
            },
            "callout" => ContentNode::Callout {
                content: rich_text_content(payload),
                children,
            },
            "divider" => ContentNode::Divider,
            "image" => ContentNode::Image {
                content: caption_content(payload),
                // External reference and uploaded file are mutually exclusive
                url: payload
                    .get("external")
                    .or_else(|| payload.get("file"))
                    .and_then(|src| src.get("url"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            "bookmark" => ContentNode::Bookmark {
                content: caption_content(payload),
                url: payload
                    .get("url")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            "link_preview" => ContentNode::LinkPreview {
                // No caption in the payload; keep the wire shape uniform
                content: caption_content(payload),
                url: payload
                    .get("url")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            "table" => ContentNode::Table { children },
            "table_row" => ContentNode::TableRow {
                // Cells are not individually typed; join their texts with a pipe
                content: payload
                    .get("cells")
                    .and_then(Value::as_array)
                    .map(|cells| {
                        cells
                            .iter()
                            .map(plain_text)
                            .collect::<Vec<_>>()
                            .join("|")
                    })
                    .unwrap_or_default(),
            },
            _ => ContentNode::Empty,
        }
    })
}

/// Concatenate the plain text of a rich-text run array, no separator.
fn plain_text(runs: &Value) -> String {
    runs.as_array()
        .map(|runs| {
            runs.iter()
                .filter_map(|run| run.get("plain_text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

fn rich_text_content(payload: &Value) -> String {
    plain_text(payload.get("rich_text").unwrap_or(&Value::Null))
}

fn caption_content(payload: &Value) -> String {
    plain_text(payload.get("caption").unwrap_or(&Value::Null))
}
