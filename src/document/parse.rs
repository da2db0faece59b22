use std::borrow::Cow;

use crate::config::RenderConfig;
use crate::document::fonts::{font_database, font_resolver};
use crate::foundation::error::{SvgagerError, SvgagerResult};
use crate::layout::resolve::DEFAULT_INTRINSIC_SIZE;

/// Where a document's natural size comes from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntrinsicSize {
    /// Both `width` and `height` attributes on the root, in user units.
    Explicit {
        /// Width in user units.
        width: f64,
        /// Height in user units.
        height: f64,
    },
    /// Size taken from the root `viewBox`.
    ViewBox {
        /// viewBox width.
        width: f64,
        /// viewBox height.
        height: f64,
    },
    /// Neither usable attributes nor a viewBox.
    Absent,
}

impl IntrinsicSize {
    /// `(width, height)` when the document carries a size.
    pub fn dimensions(self) -> Option<(f64, f64)> {
        match self {
            Self::Explicit { width, height } | Self::ViewBox { width, height } => {
                Some((width, height))
            }
            Self::Absent => None,
        }
    }
}

/// Node counts of a parsed scene, plus the number of font faces available to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SceneStats {
    /// Group nodes, excluding the root.
    pub groups: usize,
    /// Path nodes (shapes are converted to paths).
    pub paths: usize,
    /// Raster or nested SVG images.
    pub images: usize,
    /// Text nodes.
    pub text_nodes: usize,
    /// Faces in the font database used for text.
    pub font_faces: usize,
}

/// A parsed SVG scene and its intrinsic size.
pub struct Document {
    tree: usvg::Tree,
    intrinsic: IntrinsicSize,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("intrinsic", &self.intrinsic)
            .field("size", &self.tree.size())
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Intrinsic size as declared by the markup.
    pub fn intrinsic(&self) -> IntrinsicSize {
        self.intrinsic
    }

    /// Parsed render tree.
    pub fn tree(&self) -> &usvg::Tree {
        &self.tree
    }

    /// Size of the tree's coordinate space, which the rasterizer maps onto the canvas.
    ///
    /// Equals the intrinsic size, or [`DEFAULT_INTRINSIC_SIZE`] for [`IntrinsicSize::Absent`].
    pub fn viewport_size(&self) -> (f32, f32) {
        let size = self.tree.size();
        (size.width(), size.height())
    }

    /// Count scene nodes by kind.
    pub fn stats(&self) -> SceneStats {
        let mut stats = SceneStats {
            font_faces: self.tree.fontdb().faces().count(),
            ..SceneStats::default()
        };
        count_nodes(self.tree.root(), &mut stats);
        stats
    }
}

fn count_nodes(group: &usvg::Group, stats: &mut SceneStats) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => {
                stats.groups += 1;
                count_nodes(g.as_ref(), stats);
            }
            usvg::Node::Path(_) => stats.paths += 1,
            usvg::Node::Image(_) => stats.images += 1,
            usvg::Node::Text(_) => stats.text_nodes += 1,
        }
    }
}

/// Parse SVG markup into a [`Document`].
///
/// Empty input, malformed XML and a root element other than `<svg>` are all
/// [`SvgagerError::Parse`]. A root `width`, `height` or `viewBox` that is zero or negative is [`SvgagerError::Render`].
///
/// The root sizing attributes are normalized before the scene is built, so the tree's coordinate
/// space is always the intrinsic size: the `viewBox` when only it is usable, and
/// [`DEFAULT_INTRINSIC_SIZE`] when the document carries no size at all.
#[tracing::instrument(skip_all, fields(len = text.len()))]
pub fn parse_document(text: &str, config: &RenderConfig) -> SvgagerResult<Document> {
    if text.trim().is_empty() {
        return Err(SvgagerError::parse("document is empty"));
    }

    let xml = roxmltree::Document::parse_with_options(
        text,
        roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        },
    )
    .map_err(|e| SvgagerError::parse(e.to_string()))?;

    let root = xml.root_element();
    if root.tag_name().name() != "svg" {
        return Err(SvgagerError::parse(format!(
            "root element is <{}>, expected <svg>",
            root.tag_name().name()
        )));
    }
    let declared = declared_size(root)?;
    let markup = match declared {
        Declared::Explicit => Cow::Borrowed(text),
        Declared::ViewBox { .. } => {
            Cow::Owned(rewrite_root_size(text, root, &["width", "height"], None))
        }
        Declared::Absent => Cow::Owned(rewrite_root_size(
            text,
            root,
            &["width", "height", "viewBox"],
            Some(DEFAULT_INTRINSIC_SIZE),
        )),
    };

    let opts = usvg::Options {
        resources_dir: config.resources_dir.clone(),
        fontdb: font_database(config),
        font_resolver: font_resolver(),
        ..Default::default()
    };
    let tree =
        usvg::Tree::from_str(&markup, &opts).map_err(|e| SvgagerError::parse(e.to_string()))?;

    let intrinsic = match declared {
        Declared::Explicit => IntrinsicSize::Explicit {
            width: f64::from(tree.size().width()),
            height: f64::from(tree.size().height()),
        },
        Declared::ViewBox { width, height } => IntrinsicSize::ViewBox { width, height },
        Declared::Absent => IntrinsicSize::Absent,
    };
    tracing::debug!(?intrinsic, size = ?tree.size(), "parsed svg document");

    Ok(Document { tree, intrinsic })
}

enum Declared {
    Explicit,
    ViewBox { width: f64, height: f64 },
    Absent,
}

fn declared_size(root: roxmltree::Node<'_, '_>) -> SvgagerResult<Declared> {
    // Percentages are relative to a viewport the document does not have.
    let absolute = |name: &str| {
        root.attribute(name)
            .map(str::trim)
            .filter(|v| !v.is_empty() && !v.ends_with('%'))
    };
    let width = absolute("width");
    let height = absolute("height");

    for (name, value) in [("width", width), ("height", height)] {
        if let Some(v) = value.and_then(length_number).filter(|v| *v <= 0.0) {
            return Err(SvgagerError::render(format!(
                "root {name} {v} is degenerate; aspect ratio is undefined"
            )));
        }
    }
    if width.is_some() && height.is_some() {
        return Ok(Declared::Explicit);
    }

    match root.attribute("viewBox").and_then(view_box_size) {
        Some((w, h)) if w <= 0.0 || h <= 0.0 => Err(SvgagerError::render(format!(
            "viewBox size {w}x{h} is degenerate; aspect ratio is undefined"
        ))),
        Some((width, height)) => Ok(Declared::ViewBox { width, height }),
        None => Ok(Declared::Absent),
    }
}

fn length_number(v: &str) -> Option<f64> {
    v.trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .trim_end()
        .parse()
        .ok()
}

fn view_box_size(vb: &str) -> Option<(f64, f64)> {
    let nums: Vec<f64> = vb
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    match nums.as_slice() {
        [_, _, w, h] => Some((*w, *h)),
        _ => None,
    }
}

/// Copy `text` with the named root attributes removed and, optionally, a fixed size inserted.
fn rewrite_root_size(
    text: &str,
    root: roxmltree::Node<'_, '_>,
    remove: &[&str],
    insert: Option<(u32, u32)>,
) -> String {
    // Right after the root tag name, ahead of every attribute.
    let name_start = root.range().start + 1;
    let name_len = text[name_start..]
        .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(0);
    let insert_at = name_start + name_len;

    let mut out = String::with_capacity(text.len() + 32);
    out.push_str(&text[..insert_at]);
    if let Some((w, h)) = insert {
        out.push_str(&format!(r#" width="{w}" height="{h}""#));
    }

    let mut cursor = insert_at;
    for attr in root.attributes() {
        if attr.namespace().is_none() && remove.contains(&attr.name()) {
            let range = attr.range();
            out.push_str(&text[cursor..range.start]);
            cursor = range.end;
        }
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/document/parse.rs"]
mod tests;
