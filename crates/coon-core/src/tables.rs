//! Static abbreviation tables shared by both pipeline directions.
//!
//! Three ordered term → token tables, one per category (keyword, widget,
//! property). They are defined once, immutable, and safe to read from any
//! number of concurrent calls. **Iteration order is significant**: the
//! compress and decompress pipelines walk these slices front to back, and
//! that order is part of the COON format contract.

/// A single canonical-term → short-token mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abbreviation {
    pub term: &'static str,
    pub token: &'static str,
}

impl Abbreviation {
    const fn new(term: &'static str, token: &'static str) -> Self {
        Self { term, token }
    }

    /// Entries whose token equals the term (`Row`, `AppBar`) compress to
    /// themselves; rewrite passes skip them.
    pub fn is_identity(&self) -> bool {
        self.term == self.token
    }
}

/// Dart keyword abbreviations. `class` and `final` surface as the structural
/// markers `c:` / `f:` emitted by the declaration rules; `return` is the only
/// entry rewritten by a generic whole-word rule. The remaining entries
/// reserve tokens for the format.
pub const KEYWORDS: &[Abbreviation] = &[
    Abbreviation::new("class", "c:"),
    Abbreviation::new("final", "f:"),
    Abbreviation::new("extends", "<"),
    Abbreviation::new("import", "im:"),
    Abbreviation::new("return", "ret"),
    Abbreviation::new("async", "asy"),
    Abbreviation::new("await", "awt"),
];

/// Common container/layout widget names. `Row` and `AppBar` are identity
/// entries.
pub const WIDGETS: &[Abbreviation] = &[
    Abbreviation::new("Scaffold", "Scf"),
    Abbreviation::new("Column", "Col"),
    Abbreviation::new("Row", "Row"),
    Abbreviation::new("Container", "Cont"),
    Abbreviation::new("Padding", "Pad"),
    Abbreviation::new("Center", "Ctr"),
    Abbreviation::new("Text", "Txt"),
    Abbreviation::new("AppBar", "AppBar"),
    Abbreviation::new("SafeArea", "SA"),
    Abbreviation::new("SizedBox", "Szb"),
    Abbreviation::new("Expanded", "Exp"),
    Abbreviation::new("ListView", "Lstv"),
    Abbreviation::new("GridView", "GrdV"),
    Abbreviation::new("Stack", "Stk"),
    Abbreviation::new("Positioned", "Pos"),
];

/// Named-argument keys. Two pairs intentionally share a token:
/// `children`/`child` → `ch:` and `text`/`title` → `t:`. This is a lossy
/// collapse accepted by the format, not a bug; see [`property_expansions`]
/// for how the decompressor resolves it.
pub const PROPERTIES: &[Abbreviation] = &[
    Abbreviation::new("controller", "c:"),
    Abbreviation::new("onPressed", "op:"),
    Abbreviation::new("onChanged", "oc:"),
    Abbreviation::new("children", "ch:"),
    Abbreviation::new("child", "ch:"),
    Abbreviation::new("body", "bd:"),
    Abbreviation::new("appBar", "ap:"),
    Abbreviation::new("text", "t:"),
    Abbreviation::new("title", "t:"),
    Abbreviation::new("label", "lbl:"),
    Abbreviation::new("hint", "hnt:"),
    Abbreviation::new("padding", "pd:"),
    Abbreviation::new("margin", "mg:"),
    Abbreviation::new("height", "h:"),
    Abbreviation::new("width", "w:"),
    Abbreviation::new("alignment", "al:"),
    Abbreviation::new("color", "clr:"),
    Abbreviation::new("backgroundColor", "bg:"),
];

/// Property expansions for decompression: one entry per distinct token.
///
/// When several property names share a token, the LAST table entry owning it
/// wins (`ch:` expands to `child`, `t:` to `title`). Entries keep the slice
/// position of the token's first appearance so the expansion order stays
/// aligned with [`PROPERTIES`].
pub(crate) fn property_expansions() -> Vec<Abbreviation> {
    let mut out: Vec<Abbreviation> = Vec::new();
    for abbrev in PROPERTIES {
        match out.iter_mut().find(|e| e.token == abbrev.token) {
            Some(entry) => *entry = *abbrev,
            None => out.push(*abbrev),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_entries_are_row_and_appbar() {
        let identities: Vec<&str> = WIDGETS
            .iter()
            .filter(|a| a.is_identity())
            .map(|a| a.term)
            .collect();
        assert_eq!(identities, ["Row", "AppBar"]);
    }

    #[test]
    fn shared_tokens_expand_to_last_entry() {
        let expansions = property_expansions();
        let child = expansions.iter().find(|a| a.token == "ch:").unwrap();
        assert_eq!(child.term, "child");
        let title = expansions.iter().find(|a| a.token == "t:").unwrap();
        assert_eq!(title.term, "title");
    }

    #[test]
    fn expansions_cover_every_distinct_token_once() {
        let expansions = property_expansions();
        for (i, a) in expansions.iter().enumerate() {
            assert!(
                expansions[i + 1..].iter().all(|b| b.token != a.token),
                "duplicate token {:?}",
                a.token
            );
        }
        // 18 table entries, two shared tokens
        assert_eq!(expansions.len(), 16);
    }
}
