const BRANCH: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
const CORNER: &str = "\u{2514}\u{2500}\u{2500} "; // └──
const TRUNK: &str = "\u{2502}   "; // │
const BLANK: &str = "    ";

/// Build the connector prefix for an entry.
///
/// `lineage[d]` is true when the entry at depth `d + 1` on the path down to
/// this one is the last sibling in its directory. The final flag belongs to
/// the entry itself; the rest draw continuation columns for its ancestors.
pub(crate) fn prefix(lineage: &[bool]) -> String {
    let Some((&is_last, ancestors)) = lineage.split_last() else {
        return String::new();
    };

    let mut out = String::with_capacity(lineage.len() * TRUNK.len());
    for &ancestor_is_last in ancestors {
        out.push_str(if ancestor_is_last { BLANK } else { TRUNK });
    }
    out.push_str(if is_last { CORNER } else { BRANCH });
    out
}
