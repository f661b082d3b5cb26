//! Markup backend.
//!
//! Paints a render list into the widget's HTML fragment. The fragment is
//! meant for a host surface that interprets raw markup (a web view, an
//! `innerHTML` assignment). Response content arrives escaped, so it always
//! shows up as literal text.

use crate::render::backend::RenderBackend;
use crate::render::{DisplayItem, RenderList};
use anyhow::Result;
use std::fmt::Write;

#[derive(Debug, Default)]
pub struct MarkupBackend {
    output: String,
    frame_id: u64,
}

impl MarkupBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup produced by the last render.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }
}

fn hidden_attr(hidden: bool) -> &'static str {
    if hidden {
        " hidden"
    } else {
        ""
    }
}

impl RenderBackend for MarkupBackend {
    fn name(&self) -> &str {
        "MarkupBackend"
    }

    fn render(&mut self, list: &RenderList) -> Result<()> {
        let mut out = String::new();

        for item in &list.items {
            match item {
                DisplayItem::ActionsPanel { class, actions } => {
                    write!(out, r#"<div class="{class}">"#)?;
                    for action in actions {
                        out.push_str(action.markup());
                    }
                    out.push_str("</div>\n");
                }
                DisplayItem::RawContent { markup, wrap, hidden } => {
                    writeln!(
                        out,
                        r#"<code id="rawContent" class="raw-content" style="{}"{}>{}</code>"#,
                        wrap.white_space(),
                        hidden_attr(*hidden),
                        markup
                    )?;
                }
                DisplayItem::Placeholder { text, hidden } => {
                    writeln!(out, r#"<p class="no-info"{}>{}</p>"#, hidden_attr(*hidden), text)?;
                }
            }
        }

        self.output = out;
        self.frame_id = self.frame_id.wrapping_add(1);
        Ok(())
    }
}
