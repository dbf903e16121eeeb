#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing, resolving and selecting must never panic
    let Ok(tree) = cascader::parse_tree(content, cascader::TreeFormat::Json, Path::new("fuzz.json")) else {
        return;
    };
    let path: Vec<String> = content.split('/').take(8).map(str::to_string).collect();
    let resolved = cascader::resolve(&tree, &path);
    assert!(resolved.is_empty() || resolved.len() == path.len());

    let mut select = cascader::CascadeSelect::new(&tree, cascader::CascadeConfig::default());
    select.set_value(&tree, path);
    if let Some(first) = tree.first() {
        select.select(0, first);
    }
    let _ = select.summary();
});
