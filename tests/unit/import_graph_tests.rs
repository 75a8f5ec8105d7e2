use cssbundle_cli::bundle::{ContentNode, ElementId, compute_fingerprint};
use cssbundle_cli::core::BundleError;
use cssbundle_cli::resolver::{ImportSet, get_less_dependencies, resolve};
use cssbundle_cli::test_utils::{LessTree, init_test_logging};

fn names(tree: &LessTree, set: &ImportSet) -> Vec<String> {
    set.iter()
        .map(|path| path.strip_prefix(tree.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_cycle_through_root() {
    init_test_logging(None);
    let tree = LessTree::new().unwrap();
    tree.write("a.less", "@import \"b.less\";\n").unwrap();
    tree.write("b.less", "@import \"c.less\";\n@import \"a.less\";\n").unwrap();
    tree.write("c.less", "").unwrap();

    let deps = get_less_dependencies(&tree.join("a.less")).unwrap();
    assert_eq!(names(&tree, &deps), vec!["b.less", "c.less"]);
}

#[test]
fn test_nested_directories_resolve_relative_to_importer() {
    let tree = LessTree::new().unwrap();
    tree.write("site.less", "@import 'theme/main.less';\n").unwrap();
    tree.write("theme/main.less", "  @import \"parts/header.less\";\n@import \"../vars.less\";\n")
        .unwrap();
    tree.write("theme/parts/header.less", "@import \"../../vars.less\";\n").unwrap();
    tree.write("vars.less", "@fg: #000;\n").unwrap();

    let deps = get_less_dependencies(&tree.join("site.less")).unwrap();
    assert_eq!(names(&tree, &deps), vec!["theme/main.less", "theme/parts/header.less", "vars.less"]);
}

#[test]
fn test_visited_files_are_not_rescanned() {
    let tree = LessTree::new().unwrap();
    tree.write("main.less", "@import \"lib.less\";\n").unwrap();
    // lib.less is never opened, so its missing import cannot fail the call
    tree.write("lib.less", "@import \"missing.less\";\n").unwrap();

    let visited: ImportSet = [tree.join("lib.less")].into_iter().collect();
    let deps = resolve(&tree.join("main.less"), &visited).unwrap();
    assert_eq!(names(&tree, &deps), vec!["lib.less"]);

    let err = get_less_dependencies(&tree.join("main.less")).unwrap_err();
    assert!(matches!(err, BundleError::FileResolution { .. }));
}

#[test]
fn test_comments_and_url_imports_are_ignored() {
    let tree = LessTree::new().unwrap();
    tree.write(
        "main.less",
        "// @import \"commented.less\";\n@import url(\"remote.css\");\n@import (reference) \"ref.less\";\n",
    )
    .unwrap();

    assert!(get_less_dependencies(&tree.join("main.less")).unwrap().is_empty());
}

#[test]
fn test_fingerprint_follows_shared_imports_once() {
    let tree = LessTree::new().unwrap();
    tree.write_with_mtime("main.less", "@import \"x.less\";\n@import \"y.less\";\n", 10).unwrap();
    tree.write_with_mtime("x.less", "@import \"shared.less\";\n", 20).unwrap();
    tree.write_with_mtime("y.less", "@import \"shared.less\";\n", 30).unwrap();
    tree.write_with_mtime("shared.less", "", 40).unwrap();

    let node = ContentNode::File {
        locator: tree.join("main.less"),
        basename: "main.less".to_string(),
        element: ElementId(0),
    };
    let fingerprint = compute_fingerprint(&[node]).unwrap();
    assert_eq!(fingerprint.tokens(), &["10", "40", "20", "30"]);
}
