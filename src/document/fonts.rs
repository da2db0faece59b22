use std::path::Path;
use std::sync::{Arc, OnceLock};

use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

use crate::config::RenderConfig;

static SYSTEM_FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();

/// Font database for a conversion.
///
/// The system-only database is loaded once per process and shared read-only; configs with extra
/// font directories get a private database.
pub(crate) fn font_database(config: &RenderConfig) -> Arc<usvg::fontdb::Database> {
    if config.font_dirs.is_empty() {
        if config.system_fonts {
            return Arc::clone(SYSTEM_FONTS.get_or_init(|| {
                let mut db = usvg::fontdb::Database::new();
                db.load_system_fonts();
                tracing::debug!(faces = db.len(), "loaded system fonts");
                Arc::new(db)
            }));
        }
        return Arc::new(usvg::fontdb::Database::new());
    }

    let mut db = usvg::fontdb::Database::new();
    if config.system_fonts {
        db.load_system_fonts();
    }
    for dir in &config.font_dirs {
        load_fonts_from_dir(&mut db, dir);
    }
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), %err, "skipping unreadable font");
        }
    }
}

/// Resolver that walks the requested families, then generic fallbacks, then any face at all.
pub(crate) fn font_resolver() -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(|font, fontdb| {
            let families: Vec<Family<'_>> = font
                .families()
                .iter()
                .map(query_family)
                .chain([Family::SansSerif, Family::Serif, Family::Monospace])
                .collect();
            let query = Query {
                families: &families,
                weight: Weight(font.weight()),
                stretch: query_stretch(font.stretch()),
                style: query_style(font.style()),
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|face| face.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

fn query_family(family: &usvg::FontFamily) -> Family<'_> {
    match family {
        usvg::FontFamily::Serif => Family::Serif,
        usvg::FontFamily::SansSerif => Family::SansSerif,
        usvg::FontFamily::Cursive => Family::Cursive,
        usvg::FontFamily::Fantasy => Family::Fantasy,
        usvg::FontFamily::Monospace => Family::Monospace,
        usvg::FontFamily::Named(name) => Family::Name(name.as_str()),
    }
}

fn query_stretch(stretch: usvg::FontStretch) -> Stretch {
    use usvg::FontStretch as S;
    match stretch {
        S::UltraCondensed => Stretch::UltraCondensed,
        S::ExtraCondensed => Stretch::ExtraCondensed,
        S::Condensed => Stretch::Condensed,
        S::SemiCondensed => Stretch::SemiCondensed,
        S::Normal => Stretch::Normal,
        S::SemiExpanded => Stretch::SemiExpanded,
        S::Expanded => Stretch::Expanded,
        S::ExtraExpanded => Stretch::ExtraExpanded,
        S::UltraExpanded => Stretch::UltraExpanded,
    }
}

fn query_style(style: usvg::FontStyle) -> Style {
    match style {
        usvg::FontStyle::Normal => Style::Normal,
        usvg::FontStyle::Italic => Style::Italic,
        usvg::FontStyle::Oblique => Style::Oblique,
    }
}
