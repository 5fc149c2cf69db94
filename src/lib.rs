pub mod ast;
pub mod layout;
pub mod parser;

pub fn mind_map(input: &str) -> layout::Node {
    mind_map_with_options(input, &layout::LayoutOptions::default())
}

pub fn mind_map_with_options(input: &str, options: &layout::LayoutOptions) -> layout::Node {
    let outline = parser::parse_outline(input);
    layout::build_with_options(&outline, options)
}
