use mima::parser::{DEFAULT_COLOR, parse_outline};
use pretty_assertions::assert_eq;

// =============================================================================
// Heading lines
// =============================================================================

#[test]
fn spec_level_from_marker_count() {
    let outline = parse_outline("# one\n## two\n###### six\n");
    assert_eq!(outline.entries[0].level, 1);
    assert_eq!(outline.entries[1].level, 2);
    assert_eq!(outline.entries[2].level, 6);
}

#[test]
fn spec_non_heading_lines_skipped() {
    let outline = parse_outline("intro prose\n# A\n- bullet\n## B\n");
    let labels: Vec<&str> = outline.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "B"]);
}

#[test]
fn spec_blank_lines_skipped() {
    let outline = parse_outline("\n# A\n   \n\t\n## B\n\n");
    assert_eq!(outline.entries.len(), 2);
}

#[test]
fn spec_source_order_preserved() {
    let outline = parse_outline("# r\n## b\n### c\n## a\n");
    let labels: Vec<&str> = outline.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["r", "b", "c", "a"]);
}

// =============================================================================
// Color tags
// =============================================================================

#[test]
fn spec_color_tag_extracted_and_stripped() {
    let outline = parse_outline("## Branch [#00FF00]\n");
    assert_eq!(outline.entries[0].color, "#00FF00");
    assert_eq!(outline.entries[0].label, "Branch");
}

#[test]
fn spec_color_tag_case_insensitive() {
    let outline = parse_outline("# a [#ff00aa]\n# b [#FF00AA]\n# c [#Ff00aA]\n");
    assert_eq!(outline.entries[0].color, "#ff00aa");
    assert_eq!(outline.entries[1].color, "#FF00AA");
    assert_eq!(outline.entries[2].color, "#Ff00aA");
}

#[test]
fn spec_color_tag_anywhere_in_line() {
    let outline = parse_outline("## [#112233] Leading tag\n## Trailing tag [#445566]\n");
    assert_eq!(outline.entries[0].color, "#112233");
    assert_eq!(outline.entries[0].label, "Leading tag");
    assert_eq!(outline.entries[1].color, "#445566");
    assert_eq!(outline.entries[1].label, "Trailing tag");
}

#[test]
fn spec_color_default_when_absent() {
    let outline = parse_outline("# untagged\n");
    assert_eq!(outline.entries[0].color, DEFAULT_COLOR);
    assert_eq!(DEFAULT_COLOR, "#212529");
}

#[test]
fn spec_color_malformed_tag_stays_in_label() {
    let outline = parse_outline("# short [#FFF]\n# words [#redred]... wait\n");
    assert_eq!(outline.entries[0].color, DEFAULT_COLOR);
    assert_eq!(outline.entries[0].label, "short [#FFF]");
    assert_eq!(outline.entries[1].color, DEFAULT_COLOR);
}

// =============================================================================
// Edge-label annotations
// =============================================================================

#[test]
fn spec_edge_label_from_trailing_annotation() {
    let outline = parse_outline("## Child (relates to)\n");
    assert_eq!(outline.entries[0].edge_label, Some("relates to".to_string()));
    assert_eq!(outline.entries[0].label, "Child");
}

#[test]
fn spec_edge_label_absent_is_unset() {
    let outline = parse_outline("## Plain\n");
    assert_eq!(outline.entries[0].edge_label, None);
}

#[test]
fn spec_edge_label_mid_line_not_matched() {
    let outline = parse_outline("## f(x) notation\n");
    assert_eq!(outline.entries[0].edge_label, None);
    assert_eq!(outline.entries[0].label, "f(x) notation");
}

#[test]
fn spec_edge_label_recognized_before_color_tag() {
    let outline = parse_outline("## Branch (edge1) [#FF0000]\n");
    assert_eq!(outline.entries[0].edge_label, Some("edge1".to_string()));
    assert_eq!(outline.entries[0].color, "#FF0000");
    assert_eq!(outline.entries[0].label, "Branch");
}

#[test]
fn spec_edge_label_recognized_after_color_tag() {
    let outline = parse_outline("## Branch [#FF0000] (edge1)\n");
    assert_eq!(outline.entries[0].edge_label, Some("edge1".to_string()));
    assert_eq!(outline.entries[0].color, "#FF0000");
    assert_eq!(outline.entries[0].label, "Branch");
}

// =============================================================================
// Robustness
// =============================================================================

#[test]
fn spec_parser_never_fails() {
    for input in [
        "",
        "\n\n\n",
        "]][[",
        "# (((",
        "## )\n### [#\n",
        "#### [#12345678] ()",
        "no headings at all",
    ] {
        let _ = parse_outline(input);
    }
}

#[test]
fn spec_label_fully_cleaned() {
    let outline = parse_outline("###   Spaced   label   [#ABCDEF]  (tag)  \n");
    let entry = &outline.entries[0];
    assert_eq!(entry.level, 3);
    assert_eq!(entry.label, "Spaced   label");
    assert_eq!(entry.color, "#ABCDEF");
    assert_eq!(entry.edge_label, Some("tag".to_string()));
}
