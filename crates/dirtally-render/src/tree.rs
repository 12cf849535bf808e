//! Collapsible HTML list rendering.

use std::rc::Rc;

use dirtally_core::{DisplayUnit, NodeId, PathTree, SizeUnits, TreeNode};
use strum::IntoEnumIterator;

use crate::config::{ChildOrder, RenderConfig};
use crate::markup::{escape_html, FolderKey};

/// Renders a propagated tree as nested `<li>` entries.
pub struct TreeRenderer {
    config: RenderConfig,
}

/// Pending work on the explicit render stack.
enum Frame<'a> {
    /// Emit a node; `parent` is the key of the folder holding it.
    Enter {
        node: &'a TreeNode,
        parent: Rc<FolderKey>,
        depth: usize,
    },
    /// Close the list opened for a folder.
    Close { depth: usize },
}

impl TreeRenderer {
    /// Create a renderer with default settings.
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    /// Create a renderer with a custom config.
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the whole tree.
    ///
    /// Folder ids hash `ancestor_path_hint` followed by the folder's segments;
    /// pass an empty string when rendering a complete report. Rendering reads
    /// the tree only, so repeated calls produce identical output.
    pub fn render(&self, tree: &PathTree, ancestor_path_hint: &str) -> String {
        let mut out = String::new();
        let mut stack: Vec<Frame<'_>> = Vec::new();
        let root = Rc::new(FolderKey::root(ancestor_path_hint));

        for node in self.ordered(tree, tree.roots.values().copied()).into_iter().rev() {
            stack.push(Frame::Enter {
                node,
                parent: Rc::clone(&root),
                depth: 0,
            });
        }

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Close { depth } => {
                    push_line(&mut out, depth + 1, "</ul>");
                    push_line(&mut out, depth, "</li>");
                }
                Frame::Enter {
                    node,
                    parent,
                    depth,
                } => {
                    let name = escape_html(&node.name);
                    let sizes = self.size_spans(&node.cumulative);

                    if node.is_file() {
                        push_line(
                            &mut out,
                            depth,
                            &format!("<li><span class=\"file-icon\"></span> {name} {sizes}</li>"),
                        );
                    } else if node.has_children() {
                        let key = Rc::new(parent.child(&node.name));
                        let id = key.id();
                        push_line(&mut out, depth, "<li>");
                        push_line(
                            &mut out,
                            depth + 1,
                            &format!(
                                "<span class=\"folder\" onclick=\"toggleFolder('{id}')\">{name} {sizes}</span>"
                            ),
                        );
                        push_line(
                            &mut out,
                            depth + 1,
                            &format!("<ul class=\"nested\" id=\"{id}\">"),
                        );

                        stack.push(Frame::Close { depth });
                        let children = self.ordered(tree, node.children.values().copied());
                        for child in children.into_iter().rev() {
                            stack.push(Frame::Enter {
                                node: child,
                                parent: Rc::clone(&key),
                                depth: depth + 2,
                            });
                        }
                    } else if self.config.show_empty_folders {
                        push_line(
                            &mut out,
                            depth,
                            &format!(
                                "<li><span class=\"folder empty\">{name} {sizes}&emsp;<i>0 items</i></span></li>"
                            ),
                        );
                    }
                }
            }
        }

        tracing::debug!(bytes = out.len(), nodes = tree.len(), "Rendered tree");
        out
    }

    /// Four size spans, only the default unit visible.
    fn size_spans(&self, size: &SizeUnits) -> String {
        let decimals = self.config.decimals;
        DisplayUnit::iter()
            .map(|unit| {
                let value = match unit {
                    DisplayUnit::Bytes => size.bytes.to_string(),
                    other => format!("{:.decimals$}", size.get(other)),
                };
                let style = if unit == self.config.default_unit {
                    ""
                } else {
                    " style=\"display: none;\""
                };
                format!(
                    "<span class=\"size {}\"{style}>&emsp;<b>{value} {}</b></span>",
                    unit.css_class(),
                    unit.label()
                )
            })
            .collect()
    }

    /// Resolve ids and apply the configured child order.
    fn ordered<'a>(
        &self,
        tree: &'a PathTree,
        ids: impl Iterator<Item = NodeId>,
    ) -> Vec<&'a TreeNode> {
        let mut nodes: Vec<&TreeNode> = ids.filter_map(|id| tree.node(id)).collect();
        match self.config.order {
            ChildOrder::Insertion => {}
            ChildOrder::Name => nodes.sort_by(|a, b| a.name.cmp(&b.name)),
            ChildOrder::SizeDescending => {
                nodes.sort_by(|a, b| b.cumulative.bytes.cmp(&a.cumulative.bytes))
            }
        }
        nodes
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(line);
    out.push('\n');
}
