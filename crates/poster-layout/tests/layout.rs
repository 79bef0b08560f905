use poster_core::color::Color;
use poster_core::models::chart::ChartKind;
use poster_core::models::document::PosterDocument;
use poster_core::models::layout::LayoutId;
use poster_core::models::theme::{Motif, Theme};
use poster_core::visual::{BlockKind, Extent, Placement, Rect, SectionRole, VisualBlock};
use poster_layout::constants::{CANVAS, HEADER_HEIGHT};
use poster_layout::layouts::{arrow_color, materials_preview};
use poster_layout::{render, scaled_size};
use poster_themes::{default_theme, get_theme, list_themes};

fn sections_with_text(doc: &PosterDocument) -> Vec<(SectionRole, &str)> {
    vec![
        (SectionRole::Abstract, doc.abstract_text.as_str()),
        (SectionRole::Introduction, doc.introduction.as_str()),
        (SectionRole::Methods, doc.methods.as_str()),
        (SectionRole::Results, doc.results.as_str()),
        (SectionRole::Discussion, doc.discussion.as_str()),
        (SectionRole::Conclusions, doc.conclusions.as_str()),
        (SectionRole::References, doc.references.as_str()),
    ]
}

fn rich_document() -> PosterDocument {
    let mut doc = PosterDocument::initial();
    doc.introduction = "First paragraph.\nSecond paragraph.".to_string();
    doc.methods = "m".repeat(500);
    doc.discussion = String::new();
    doc
}

#[test]
fn render_is_deterministic() {
    let doc = rich_document();
    for theme in list_themes() {
        for layout in LayoutId::ALL {
            assert_eq!(
                render(&doc, theme, layout),
                render(&doc, theme, layout),
                "{layout} / {}",
                theme.id
            );
        }
    }
}

#[test]
fn classic_initial_document() {
    let doc = PosterDocument::initial();
    let tree = render(&doc, default_theme(), LayoutId::Classic);

    let sidebar = tree
        .body
        .walk()
        .find(|b| matches!(b.kind, BlockKind::Sidebar))
        .expect("classic has a sidebar");
    let abstract_block = sidebar.find_section(SectionRole::Abstract).unwrap();
    assert_eq!(abstract_block.section_text().unwrap(), doc.abstract_text);
    assert!(sidebar.find_section(SectionRole::Contact).is_some());

    let columns = &tree.body.children[1];
    assert_eq!(columns.children.len(), 3);
    assert!(columns.children.iter().all(|c| matches!(c.kind, BlockKind::Column)));

    let figures: Vec<_> = tree.chart_figures().collect();
    assert_eq!(figures.len(), 1);
    assert_eq!(figures[0].kind, ChartKind::Bar);
    assert!((figures[0].effective_max.unwrap() - 96.8).abs() < 1e-9);
}

#[test]
fn section_text_is_verbatim_in_every_layout() {
    let doc = rich_document();
    let theme = get_theme("crimson").unwrap();
    for layout in LayoutId::ALL {
        let tree = render(&doc, theme, layout);
        for (role, text) in sections_with_text(&doc) {
            if let Some(block) = tree.find_section(role) {
                assert_eq!(block.section_text().unwrap(), text, "{layout}: {role:?}");
            } else {
                assert_eq!(layout, LayoutId::Cycle, "{layout} is missing {role:?}");
            }
        }
    }
}

#[test]
fn cycle_shows_the_four_flow_sections() {
    let doc = rich_document();
    let tree = render(&doc, default_theme(), LayoutId::Cycle);
    for role in [
        SectionRole::Introduction,
        SectionRole::Conclusions,
        SectionRole::Methods,
        SectionRole::Results,
        SectionRole::Materials,
    ] {
        assert!(tree.find_section(role).is_some(), "{role:?}");
    }
}

#[test]
fn paragraphs_split_on_line_breaks() {
    let doc = rich_document();
    let tree = render(&doc, default_theme(), LayoutId::Standard);

    match &tree.find_section(SectionRole::Introduction).unwrap().kind {
        BlockKind::TextSection { paragraphs, .. } => {
            assert_eq!(paragraphs, &vec!["First paragraph.", "Second paragraph."]);
        }
        _ => unreachable!(),
    }
    match &tree.find_section(SectionRole::Discussion).unwrap().kind {
        BlockKind::TextSection { paragraphs, .. } => assert_eq!(paragraphs, &vec![""]),
        _ => unreachable!(),
    }
}

#[test]
fn materials_node_truncates_methods() {
    let doc = rich_document();
    let tree = render(&doc, default_theme(), LayoutId::Cycle);
    let text = tree
        .find_section(SectionRole::Materials)
        .unwrap()
        .section_text()
        .unwrap();
    assert_eq!(text.len(), 303);
    assert_eq!(&text[..300], &doc.methods[..300]);
    assert!(text.ends_with("..."));
}

#[test]
fn materials_preview_counts_characters() {
    let short = materials_preview("short");
    assert_eq!(short, "short...");

    let accented = "é".repeat(301);
    let preview = materials_preview(&accented);
    assert_eq!(preview.chars().count(), 303);
}

#[test]
fn missing_chart_keeps_its_slot() {
    let mut doc = PosterDocument::initial();
    doc.chart = None;
    for layout in LayoutId::ALL {
        let tree = render(&doc, default_theme(), layout);
        assert_eq!(tree.chart_figures().count(), 0, "{layout}");
        let frame = tree
            .body
            .walk()
            .find(|b| matches!(b.kind, BlockKind::Frame))
            .unwrap_or_else(|| panic!("{layout} dropped the chart frame"));
        match &frame.children[0].kind {
            BlockKind::Placeholder { lines } => assert_eq!(lines[0].text, "No Chart Data"),
            other => panic!("{layout}: expected placeholder, got {other:?}"),
        }
    }
}

#[test]
fn header_is_the_same_for_every_layout() {
    let doc = PosterDocument::initial();
    let theme = default_theme();
    let reference = render(&doc, theme, LayoutId::Classic).header;
    for layout in LayoutId::ALL {
        assert_eq!(render(&doc, theme, layout).header, reference, "{layout}");
    }
}

#[test]
fn header_uses_primary_band_and_title_text() {
    let doc = PosterDocument::initial();
    let theme = get_theme("ocean").unwrap();
    let tree = render(&doc, theme, LayoutId::Visual);

    assert_eq!(tree.header.style.background, Some(theme.colors.primary));
    assert_eq!(
        tree.header.placement.rect(),
        Some(Rect::new(0.0, 0.0, CANVAS.width, HEADER_HEIGHT))
    );
    let logos = tree
        .header
        .walk()
        .filter(|b| matches!(b.kind, BlockKind::LogoBox { .. }))
        .count();
    assert_eq!(logos, 2);

    let title = tree
        .header
        .walk()
        .find_map(|b| match &b.kind {
            BlockKind::TitleBlock { title, .. } => Some(title),
            _ => None,
        })
        .unwrap();
    assert_eq!(title.text, doc.title);
    assert_eq!(title.style.color, theme.colors.sidebar_text);
}

#[test]
fn overlay_follows_motif_table() {
    let doc = PosterDocument::initial();
    let motif = |id: &str| {
        render(&doc, get_theme(id).unwrap(), LayoutId::Classic)
            .overlay()
            .map(|o| o.motif)
    };
    assert_eq!(motif("eco"), Some(Motif::CurvedLeaf));
    assert_eq!(motif("ocean"), Some(Motif::Wave));
    assert_eq!(motif("minimal"), Some(Motif::ConcentricCircles));
    assert_eq!(motif("crimson"), Some(Motif::DiamondGrid));
    assert_eq!(motif("nature"), Some(Motif::LeafSilhouette));
}

#[test]
fn unknown_theme_id_has_no_overlay() {
    let custom = Theme {
        id: "custom",
        name: "Custom",
        ..*default_theme()
    };
    let tree = render(&PosterDocument::initial(), &custom, LayoutId::Classic);
    assert!(tree.overlay().is_none());
}

#[test]
fn absolute_blocks_stay_on_the_canvas() {
    let canvas = Rect::new(0.0, 0.0, CANVAS.width, CANVAS.height);
    let doc = rich_document();
    for layout in LayoutId::ALL {
        let tree = render(&doc, default_theme(), layout);
        for block in tree.walk() {
            if let Some(rect) = block.placement.rect() {
                assert!(canvas.contains(&rect), "{layout}: {rect:?} leaves the canvas");
            }
        }
    }
}

#[test]
fn visual_centre_column_is_double_width() {
    let tree = render(&PosterDocument::initial(), default_theme(), LayoutId::Visual);
    let widths: Vec<f64> = tree
        .body
        .children
        .iter()
        .filter_map(|c| match c.placement {
            Placement::Flow {
                width: Extent::Fixed(w),
                ..
            } => Some(w),
            _ => None,
        })
        .collect();
    assert_eq!(widths, vec![1140.0, 2328.0, 1140.0]);
}

#[test]
fn cycle_arrow_color_avoids_pale_accent() {
    assert_eq!(
        arrow_color(get_theme("eco").unwrap()),
        Color::from_hex("#fca5a5").unwrap()
    );
    let ocean = get_theme("ocean").unwrap();
    assert_eq!(arrow_color(ocean), ocean.colors.accent);

    let tree = render(&PosterDocument::initial(), ocean, LayoutId::Cycle);
    let arrows: Vec<&VisualBlock> = tree
        .body
        .walk()
        .filter(|b| matches!(b.kind, BlockKind::Arrow { .. }))
        .collect();
    assert_eq!(arrows.len(), 4);
    match &arrows[0].kind {
        BlockKind::Arrow { path, stroke, .. } => {
            assert_eq!(path.to_svg(), "M 1200 800 Q 800 2000 1000 2500");
            assert_eq!(stroke.width, 24.0);
        }
        _ => unreachable!(),
    }
}

#[test]
fn switching_layout_keeps_header_text() {
    let doc = rich_document();
    let theme = get_theme("slate").unwrap();
    let a = render(&doc, theme, LayoutId::Geometric);
    let b = render(&doc, theme, LayoutId::Research);
    assert_eq!(a.header, b.header);
    assert_ne!(a.body, b.body);
}

#[test]
fn research_closes_with_acknowledgements() {
    let tree = render(&PosterDocument::initial(), default_theme(), LayoutId::Research);
    let ack = tree.find_section(SectionRole::Acknowledgements).unwrap();
    assert!(ack.section_text().unwrap().starts_with("We thank"));
}

#[test]
fn scaled_size_preserves_aspect_ratio() {
    let tree = render(&PosterDocument::initial(), default_theme(), LayoutId::Classic);
    let size = scaled_size(&tree, 0.25);
    assert_eq!(size.width, 1200.0);
    assert_eq!(size.height, 900.0);
    assert_eq!(tree.canvas, CANVAS);
}
