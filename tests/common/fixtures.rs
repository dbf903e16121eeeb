//! Test fixtures - reusable option trees for tests.
#![allow(dead_code)]

use cascader::CascadeOption;

/// The A / A1 / A2 / A2a tree used throughout the selection scenarios
pub fn letters_tree() -> Vec<CascadeOption> {
    vec![CascadeOption::keyed("A").with_children([
        CascadeOption::keyed("A1"),
        CascadeOption::keyed("A2").with_children([CascadeOption::keyed("A2a")]),
    ])]
}

/// Region → province → city tree
pub fn regions_tree() -> Vec<CascadeOption> {
    vec![
        CascadeOption::new("zj", "Zhejiang").with_children([
            CascadeOption::new("hz", "Hangzhou").with_children([
                CascadeOption::new("xh", "Xihu"),
                CascadeOption::new("bj", "Binjiang"),
            ]),
            CascadeOption::new("nb", "Ningbo"),
        ]),
        CascadeOption::new("js", "Jiangsu").with_children([CascadeOption::new("nj", "Nanjing")]),
    ]
}

/// `regions_tree` as a JSON file, using the `value` alias for keys
pub const REGIONS_JSON: &str = r#"[
  {"value": "zj", "label": "Zhejiang", "children": [
    {"value": "hz", "label": "Hangzhou", "children": [
      {"value": "xh", "label": "Xihu"},
      {"value": "bj", "label": "Binjiang"}
    ]},
    {"value": "nb", "label": "Ningbo"}
  ]},
  {"value": "js", "label": "Jiangsu", "children": [
    {"value": "nj", "label": "Nanjing"}
  ]}
]"#;

/// Small YAML tree
pub const REGIONS_YAML: &str = r#"options:
  - key: zj
    label: Zhejiang
    children:
      - key: hz
        label: Hangzhou
  - key: js
    label: Jiangsu
"#;

/// Tree with duplicate sibling keys under `zj`
pub const DUPLICATE_JSON: &str = r#"[
  {"key": "zj", "children": [{"key": "hz"}, {"key": "hz"}]}
]"#;

pub fn keys(values: &[&str]) -> Vec<String> {
    values.iter().map(|k| k.to_string()).collect()
}
