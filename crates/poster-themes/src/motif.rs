use poster_core::models::theme::{Motif, Theme};

/// Which header motif each theme draws. Themes not listed get none.
pub const MOTIFS: &[(&str, Motif)] = &[
    ("eco", Motif::CurvedLeaf),
    ("ocean", Motif::Wave),
    ("slate", Motif::ConcentricCircles),
    ("minimal", Motif::ConcentricCircles),
    ("ice", Motif::ConcentricCircles),
    ("crimson", Motif::DiamondGrid),
    ("brick", Motif::DiamondGrid),
    ("nature", Motif::LeafSilhouette),
];

pub fn motif_for_id(theme_id: &str) -> Option<Motif> {
    MOTIFS
        .iter()
        .find(|(id, _)| *id == theme_id)
        .map(|(_, motif)| *motif)
}

pub fn motif_for(theme: &Theme) -> Option<Motif> {
    motif_for_id(theme.id)
}
