use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ast::{Entry, Outline};
use crate::parser::DEFAULT_COLOR;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub label: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_label: Option<String>,
    pub position: Position,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalPolicy {
    /// Root sits at `root_y`; a first child goes one step above its parent,
    /// later children step below it by their sibling index.
    ParentAnchored,
    /// Every node sits at `sibling_index * vertical_spacing`.
    SiblingIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScheme {
    /// `node-<depth>-<k>`, `k` counting nodes of that depth in source order.
    Positional,
    /// Lowercased, hyphenated label, deduplicated with `-2`, `-3`, ...
    Slug,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
    pub root_y: f64,
    pub vertical_policy: VerticalPolicy,
    pub id_scheme: IdScheme,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            horizontal_spacing: HORIZONTAL_SPACING,
            vertical_spacing: VERTICAL_SPACING,
            root_y: ROOT_Y,
            vertical_policy: VerticalPolicy::ParentAnchored,
            id_scheme: IdScheme::Positional,
        }
    }
}

const HORIZONTAL_SPACING: f64 = 200.0;
const VERTICAL_SPACING: f64 = 100.0;
const ROOT_Y: f64 = 300.0;
const FALLBACK_LABEL: &str = "root";

struct Slot<'a> {
    level: usize,
    entry: Option<&'a Entry>,
    parent: usize,
    sibling_index: usize,
    children: Vec<usize>,
}

pub fn build(outline: &Outline) -> Node {
    build_with_options(outline, &LayoutOptions::default())
}

pub fn build_with_options(outline: &Outline, options: &LayoutOptions) -> Node {
    // Slot 0 is a virtual super-root at level 0. Every top-level entry folds
    // under it; it only materializes when the outline has no single root.
    let mut slots: Vec<Slot> = vec![Slot {
        level: 0,
        entry: None,
        parent: 0,
        sibling_index: 0,
        children: Vec::new(),
    }];
    let mut open: Vec<usize> = vec![0];

    for entry in &outline.entries {
        while open.len() > 1 && slots[open[open.len() - 1]].level >= entry.level {
            open.pop();
        }
        let parent = open[open.len() - 1];
        let index = slots.len();
        let sibling_index = slots[parent].children.len();
        slots.push(Slot {
            level: entry.level,
            entry: Some(entry),
            parent,
            sibling_index,
            children: Vec::new(),
        });
        slots[parent].children.push(index);
        open.push(index);
    }

    // A single top-level entry is the root itself; zero or several make the
    // super-root materialize as a synthetic root holding them.
    let root = if slots[0].children.len() == 1 { 1 } else { 0 };

    let mut depths = vec![0usize; slots.len()];
    let mut ys = vec![0f64; slots.len()];
    ys[root] = match options.vertical_policy {
        VerticalPolicy::ParentAnchored => options.root_y,
        VerticalPolicy::SiblingIndex => 0.0,
    };

    // Parents sit at lower indexes than their children, so one ascending
    // pass settles depth and y for the whole arena.
    for i in (root + 1)..slots.len() {
        let parent = slots[i].parent;
        depths[i] = depths[parent] + 1;
        let k = slots[i].sibling_index;
        ys[i] = match options.vertical_policy {
            VerticalPolicy::ParentAnchored => {
                if k == 0 {
                    ys[parent] - options.vertical_spacing
                } else {
                    ys[parent] + k as f64 * options.vertical_spacing
                }
            }
            VerticalPolicy::SiblingIndex => k as f64 * options.vertical_spacing,
        };
    }

    let ids = assign_ids(&slots, &depths, root, options.id_scheme);

    // Children sit at higher indexes, so a descending pass sees every child
    // built before its parent needs it.
    let mut built: Vec<Option<Node>> = slots.iter().map(|_| None).collect();
    for i in (root..slots.len()).rev() {
        let mut children = Vec::with_capacity(slots[i].children.len());
        for &child in &slots[i].children {
            if let Some(node) = built[child].take() {
                children.push(node);
            }
        }
        let (label, color, edge_label) = match slots[i].entry {
            Some(entry) => (
                entry.label.clone(),
                entry.color.clone(),
                entry.edge_label.clone(),
            ),
            None => (FALLBACK_LABEL.to_string(), DEFAULT_COLOR.to_string(), None),
        };
        built[i] = Some(Node {
            id: ids[i].clone(),
            label,
            color,
            edge_label,
            position: Position {
                x: depths[i] as f64 * options.horizontal_spacing,
                y: ys[i],
            },
            children,
        });
    }

    // The descending pass always fills the root slot.
    built[root].take().unwrap()
}

fn assign_ids(slots: &[Slot], depths: &[usize], root: usize, scheme: IdScheme) -> Vec<String> {
    let mut ids = vec![String::new(); slots.len()];
    match scheme {
        IdScheme::Positional => {
            let mut per_depth: Vec<usize> = Vec::new();
            for i in root..slots.len() {
                let d = depths[i];
                if d >= per_depth.len() {
                    per_depth.resize(d + 1, 0);
                }
                ids[i] = format!("node-{d}-{}", per_depth[d]);
                per_depth[d] += 1;
            }
        }
        IdScheme::Slug => {
            let mut taken = HashSet::new();
            for i in root..slots.len() {
                let label = match slots[i].entry {
                    Some(entry) => entry.label.as_str(),
                    None => FALLBACK_LABEL,
                };
                ids[i] = slug_id(label, &mut taken);
            }
        }
    }
    ids
}

fn slug_id(label: &str, taken: &mut HashSet<String>) -> String {
    let mut base = label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if base.is_empty() {
        base = "node".to_string();
    }
    let mut id = base.clone();
    let mut n = 1;
    while !taken.insert(id.clone()) {
        n += 1;
        id = format!("{base}-{n}");
    }
    id
}
