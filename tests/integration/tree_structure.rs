//! Integration tests for tree structure correctness

use dirnode::tree::builder::TreeBuilder;
use dirnode::tree::{Node, NodeRef};
use std::fs;
use tempfile::TempDir;

fn count_nodes(node: &dyn Node, files: &mut usize, dirs: &mut usize) {
    if node.is_directory() {
        *dirs += 1;
    } else {
        *files += 1;
    }
    for child in node.children().unwrap() {
        count_nodes(child.as_ref(), files, dirs);
    }
}

/// Test that tree contains all files and directories
#[test]
fn test_tree_contains_all_entries() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir(root.join("dir1")).unwrap();
    fs::create_dir(root.join("dir2")).unwrap();
    fs::write(root.join("dir1").join("file.txt"), "content").unwrap();
    fs::write(root.join("file1.txt"), "content1").unwrap();
    fs::write(root.join("file2.txt"), "content2").unwrap();

    let tree = TreeBuilder::new(root).build().unwrap();

    let (mut files, mut dirs) = (0, 0);
    count_nodes(&tree, &mut files, &mut dirs);

    assert_eq!(files, 3);
    assert_eq!(dirs, 3); // root + dir1 + dir2
}

/// Test that every directory lists its children in sorted order
#[test]
fn test_children_sorted_at_every_level() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    for dir in ["zeta", "alpha", "Mid"] {
        fs::create_dir(root.join(dir)).unwrap();
        for file in ["c.txt", "a.txt", "B.txt"] {
            fs::write(root.join(dir).join(file), file).unwrap();
        }
    }

    let tree = TreeBuilder::new(root).build().unwrap();

    fn assert_sorted(node: &dyn Node) {
        let children: Vec<NodeRef> = node.children().unwrap();
        let names: Vec<&str> = children.iter().map(|c| c.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        for child in &children {
            assert_sorted(child.as_ref());
        }
    }

    assert_sorted(&tree);
    assert_eq!(
        tree.children()
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect::<Vec<_>>(),
        vec!["Mid", "alpha", "zeta"]
    );
}

/// Test that directory children are correctly linked
#[test]
fn test_nested_children_linked() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::create_dir_all(root.join("a").join("b").join("c")).unwrap();
    fs::write(root.join("a").join("b").join("c").join("leaf.txt"), "deep").unwrap();

    let tree = TreeBuilder::new(root).build().unwrap();

    assert_eq!(tree.to_string(), "(a(b(c(leaf.txt<deep>))))");

    let a = tree.child("a").unwrap();
    let b = a.children().unwrap().remove(0);
    assert_eq!(b.name(), "b");
    assert!(b.is_directory());
}

/// Test that empty root produces an empty directory node
#[test]
fn test_empty_root() {
    let temp_dir = TempDir::new().unwrap();

    let tree = TreeBuilder::new(temp_dir.path().to_path_buf())
        .with_root_name("root")
        .build()
        .unwrap();

    assert_eq!(tree.to_string(), "root()");
    assert_eq!(tree.child_count().unwrap(), 0);
}

/// Test that names differing only in Unicode normalization collide
#[cfg(target_os = "linux")]
#[test]
fn test_unicode_equivalent_names_are_duplicates() {
    use dirnode::error::{NodeError, StorageError};

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("caf\u{e9}"), "composed").unwrap();
    fs::write(root.join("cafe\u{301}"), "decomposed").unwrap();

    let result = TreeBuilder::new(root).build();
    assert!(matches!(
        result,
        Err(StorageError::Node(NodeError::DuplicateChildName(_)))
    ));
}
