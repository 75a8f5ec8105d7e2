use cssbundle_cli::bundle::{ContentNode, CssCompressor};
use cssbundle_cli::markup::{Element, HtmlElement};
use cssbundle_cli::resolver::RootLocator;
use cssbundle_cli::test_utils::LessTree;

const PAGE: &str = r#"
<!-- <link rel="stylesheet" href="/static/hidden.css"> -->
<link rel="stylesheet" href="/static/a.css" media="screen">
<link rel="icon" href="/static/favicon.ico">
<style media="screen">p { color: red; }</style>
<link rel="stylesheet" href="/static/b.less" media="print">
<link rel="stylesheet" href="/static/c.css" media="print">
"#;

fn tree() -> LessTree {
    let tree = LessTree::new().unwrap();
    tree.write_with_mtime("a.css", "a {}", 1).unwrap();
    tree.write_with_mtime("b.less", "@import \"d.less\";\nb {}", 2).unwrap();
    tree.write_with_mtime("c.css", "c {}", 3).unwrap();
    tree.write_with_mtime("d.less", "d {}", 4).unwrap();
    tree
}

#[test]
fn test_groups_follow_document_order() {
    let tree = tree();
    let mut compressor = CssCompressor::new(PAGE, tree.settings(true));

    let kinds: Vec<bool> = compressor
        .split_contents()
        .unwrap()
        .iter()
        .map(|node| matches!(node, ContentNode::File { .. }))
        .collect();
    assert_eq!(kinds, vec![true, false, true, true]);

    let shape: Vec<(Option<String>, usize)> = compressor
        .groups()
        .unwrap()
        .iter()
        .map(|group| (group.scope.clone(), group.nodes.len()))
        .collect();
    assert_eq!(shape, vec![(Some("screen".to_string()), 2), (Some("print".to_string()), 2)]);

    assert_eq!(compressor.mtimes().unwrap().to_string(), "1,2,4,3");
}

#[test]
fn test_group_fingerprints_partition_the_whole() {
    let tree = tree();
    let mut compressor = CssCompressor::new(PAGE, tree.settings(true));

    let groups = compressor.output_groups().unwrap();
    let per_group: Vec<String> =
        groups.iter().flat_map(|group| group.fingerprint.tokens().to_vec()).collect();
    assert_eq!(per_group, compressor.mtimes().unwrap().tokens());
    assert_eq!(groups[1].content, "@import \"d.less\";\nb {}\nc {}");
}

#[test]
fn test_custom_element_source() {
    #[derive(Debug)]
    struct Parsed(HtmlElement);

    impl Element for Parsed {
        fn name(&self) -> &str {
            self.0.name()
        }

        fn attributes(&self) -> &std::collections::BTreeMap<String, String> {
            self.0.attributes()
        }

        fn inner_text(&self) -> &str {
            self.0.inner_text()
        }

        fn render(&self) -> String {
            format!("<!-- parsed -->{}", self.0.render())
        }
    }

    let tree = tree();
    let elements: Vec<Box<dyn Element>> =
        vec![Box::new(Parsed(HtmlElement::stylesheet("/css/a.css", None)))];
    let locator = Box::new(RootLocator::new("/css/", tree.path()));

    let mut compressor = CssCompressor::from_elements(elements, tree.settings(false), locator);
    assert_eq!(compressor.output(false).unwrap(), "<!-- parsed --><link href=\"/css/a.css\" rel=\"stylesheet\">");
    assert_eq!(compressor.output(true).unwrap(), "<style type=\"text/css\">\na {}\n</style>");
}
